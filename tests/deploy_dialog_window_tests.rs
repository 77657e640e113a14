use flowdash::app::dashui::deploy_dialog_window::DeployDialogWindow;
use flowdash::app::dashui::window_focus::FocusableWindow;
use flowdash::app::deploy_config::{DeployConfig, DeployTarget};
use flowdash::app::process_model::ProcessModel;
use flowdash::app::runtime_client::{ActionError, RuntimeAction};

fn staging_config() -> DeployConfig {
    DeployConfig {
        app_base_url: "http://localhost:8080/modeler".to_string(),
        deploy_urls: vec![DeployTarget {
            name: "Staging".to_string(),
            url: "http://staging.example.com/runtime/workflow/deploy".to_string(),
        }],
    }
}

fn open_dialog(action: RuntimeAction) -> DeployDialogWindow {
    let mut dialog = DeployDialogWindow::default();
    dialog.open_for(
        action,
        ProcessModel::new("37", "invoice", "Invoice handling"),
        &staging_config(),
    );
    dialog
}

#[test]
fn test_dialog_starts_closed() {
    let dialog = DeployDialogWindow::default();
    assert!(!dialog.open);
    assert!(!dialog.action_in_progress);
    assert!(dialog.error_message.is_none());
}

#[test]
fn test_open_for_snapshots_config_and_resets_state() {
    let mut dialog = open_dialog(RuntimeAction::Deploy);
    dialog.login.name = "kermit".to_string();
    dialog.login.password = "kermit".to_string();
    dialog.begin_submission();

    // Re-opening discards credentials and in-flight state
    dialog.open_for(
        RuntimeAction::Suspend,
        ProcessModel::new("38", "orders", "Order intake"),
        &staging_config(),
    );

    assert!(dialog.open);
    assert_eq!(dialog.action, RuntimeAction::Suspend);
    assert!(dialog.login.name.is_empty());
    assert!(dialog.login.password.is_empty());
    assert!(!dialog.action_in_progress);
    assert!(dialog.error_message.is_none());
    assert_eq!(dialog.deploy_targets.len(), 1);
    // A single configured environment is preselected
    assert_eq!(dialog.selected_target, Some(0));
}

#[test]
fn test_validation_requires_credentials() {
    let dialog = open_dialog(RuntimeAction::Deploy);
    assert_eq!(
        dialog.validate(),
        Err(ActionError::MissingInput(RuntimeAction::Deploy))
    );

    let mut dialog = open_dialog(RuntimeAction::Deploy);
    dialog.login.name = "kermit".to_string();
    assert!(dialog.validate().is_err());

    dialog.login.password = "kermit".to_string();
    assert!(dialog.validate().is_ok());
}

#[test]
fn test_validation_requires_a_selected_target() {
    let mut dialog = open_dialog(RuntimeAction::Activate);
    dialog.login.name = "kermit".to_string();
    dialog.login.password = "kermit".to_string();
    dialog.selected_target = None;

    assert_eq!(
        dialog.validate(),
        Err(ActionError::MissingInput(RuntimeAction::Activate))
    );
}

#[test]
fn test_submit_with_missing_input_makes_no_request() {
    let ctx = egui::Context::default();
    let mut dialog = open_dialog(RuntimeAction::Suspend);

    dialog.submit(&ctx);

    // Validation failed, so nothing was dispatched
    assert!(!dialog.action_in_progress);
    assert_eq!(
        dialog.error_message.as_deref(),
        Some("Please give username, password, environment for suspend!")
    );
    assert!(dialog.open);
}

#[test]
fn test_submit_is_ignored_while_in_progress() {
    let ctx = egui::Context::default();
    let mut dialog = open_dialog(RuntimeAction::Deploy);
    dialog.login.name = "kermit".to_string();
    dialog.login.password = "kermit".to_string();
    dialog.begin_submission();

    dialog.submit(&ctx);

    // Still in flight, and the second click produced no validation error
    assert!(dialog.action_in_progress);
    assert!(dialog.error_message.is_none());
}

#[test]
fn test_successful_completion_closes_and_reports() {
    let mut dialog = open_dialog(RuntimeAction::Suspend);
    dialog.begin_submission();
    assert!(dialog.action_in_progress);

    let completed = dialog.complete_submission(Ok(())).expect("completed action");

    assert!(!dialog.action_in_progress);
    assert!(!dialog.open);
    assert_eq!(completed.action, RuntimeAction::Suspend);
    assert_eq!(completed.target, "Staging");
    assert_eq!(completed.message(), "Suspend successful!");
}

#[test]
fn test_failed_completion_keeps_dialog_open_for_retry() {
    let mut dialog = open_dialog(RuntimeAction::Deploy);
    dialog.begin_submission();

    let completed = dialog.complete_submission(Err(ActionError::WrongCredentials));

    assert!(completed.is_none());
    assert!(!dialog.action_in_progress);
    assert!(dialog.open);
    assert_eq!(
        dialog.error_message.as_deref(),
        Some("Wrong username or password! try again")
    );
}

#[test]
fn test_rejected_completion_shows_server_message() {
    let mut dialog = open_dialog(RuntimeAction::Deploy);
    dialog.begin_submission();

    dialog.complete_submission(Err(ActionError::Rejected("X".to_string())));

    assert_eq!(dialog.error_message.as_deref(), Some("X"));
}

#[test]
fn test_cancel_closes_without_side_effects() {
    let mut dialog = open_dialog(RuntimeAction::Activate);
    dialog.login.name = "kermit".to_string();

    dialog.cancel();

    assert!(!dialog.open);
    assert!(!dialog.action_in_progress);
    assert!(dialog.error_message.is_none());
}

#[test]
fn test_progress_message_names_the_action() {
    let dialog = open_dialog(RuntimeAction::Activate);
    assert_eq!(dialog.progress_message(), "Activate in progress!");
}

#[test]
fn test_dialog_renders_when_open() {
    let mut dialog = open_dialog(RuntimeAction::Deploy);

    let ctx = egui::Context::default();
    let mut rect = None;
    let _ = ctx.run(Default::default(), |ctx| {
        let (_completed, window_rect) = dialog.show(ctx, None);
        rect = window_rect;
    });

    assert!(rect.is_some(), "open dialog should produce a window rect");
}

#[test]
fn test_closed_dialog_renders_nothing() {
    let mut dialog = DeployDialogWindow::default();

    let ctx = egui::Context::default();
    let mut rect = None;
    let _ = ctx.run(Default::default(), |ctx| {
        let (_completed, window_rect) = dialog.show(ctx, None);
        rect = window_rect;
    });

    assert!(rect.is_none());
}

#[test]
fn test_focusable_window_identity() {
    let dialog = open_dialog(RuntimeAction::Suspend);
    assert_eq!(dialog.window_id(), "deploy_dialog");
    assert_eq!(dialog.window_title(), "Suspend Process Model");
    assert!(dialog.is_open());
}
