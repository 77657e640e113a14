//! Modal deploy dialog.
//!
//! Collects runtime engine credentials and an environment, then runs one
//! deploy/suspend/activate call on a worker thread. The UI thread polls a
//! shared outcome slot each frame; `action_in_progress` is set before the
//! worker is spawned and cleared only when the outcome is observed, so a
//! second submission cannot start while one is in flight.

use crate::app::deploy_config::{DeployConfig, DeployTarget};
use crate::app::dashui::window_focus::{FocusableWindow, PositionShowParams};
use crate::app::process_model::ProcessModel;
use crate::app::runtime_client::{ActionError, LoginDetail, RuntimeAction, RuntimeClient};
use egui::{self, Context, RichText, Vec2};
use std::sync::{Arc, Mutex};
use std::thread;
use tracing::{debug, error, info};

type OutcomeSlot = Arc<Mutex<Option<Result<(), ActionError>>>>;

/// Emitted once when a submission succeeds, so the app can raise a
/// notification. The dialog has already closed itself at that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedAction {
    pub action: RuntimeAction,
    pub target: String,
}

impl CompletedAction {
    pub fn message(&self) -> String {
        format!("{} successful!", self.action.capitalized())
    }
}

/// Deploy dialog window component.
pub struct DeployDialogWindow {
    pub open: bool,
    pub action: RuntimeAction,
    pub model: ProcessModel,
    pub login: LoginDetail,
    pub deploy_targets: Vec<DeployTarget>,
    pub selected_target: Option<usize>,
    pub action_in_progress: bool,
    pub error_message: Option<String>,
    app_base_url: String,
    outcome: Option<OutcomeSlot>,
    first_open: bool,
}

impl Default for DeployDialogWindow {
    fn default() -> Self {
        Self {
            open: false,
            action: RuntimeAction::Deploy,
            model: ProcessModel::default(),
            login: LoginDetail::default(),
            deploy_targets: Vec::new(),
            selected_target: None,
            action_in_progress: false,
            error_message: None,
            app_base_url: String::new(),
            outcome: None,
            first_open: true,
        }
    }
}

impl DeployDialogWindow {
    /// Open the dialog for one action on one model. All transient state from
    /// a previous invocation is discarded; credentials are never carried
    /// over.
    pub fn open_for(&mut self, action: RuntimeAction, model: ProcessModel, config: &DeployConfig) {
        self.action = action;
        self.model = model;
        self.login = LoginDetail::default();
        self.deploy_targets = config.deploy_urls.clone();
        // With a single configured environment there is nothing to choose
        self.selected_target = if self.deploy_targets.len() == 1 {
            Some(0)
        } else {
            None
        };
        self.app_base_url = config.app_base_url.clone();
        self.action_in_progress = false;
        self.error_message = None;
        self.outcome = None;
        self.first_open = true;
        self.open = true;
    }

    /// Close the dialog. No side effects.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Presence checks only: username, password and a selected environment.
    pub fn validate(&self) -> Result<(), ActionError> {
        if self.login.is_complete() && self.selected_target.is_some() {
            Ok(())
        } else {
            Err(ActionError::MissingInput(self.action))
        }
    }

    /// Message shown next to the spinner while the request is in flight.
    pub fn progress_message(&self) -> String {
        format!("{} in progress!", self.action.capitalized())
    }

    /// Mark a submission as started. The submit button stays disabled and
    /// `submit` early-returns until the outcome is observed.
    pub fn begin_submission(&mut self) {
        self.action_in_progress = true;
        self.error_message = None;
    }

    /// Record the outcome of a submission. On success the dialog closes and
    /// the completed action is returned for notification; on failure the
    /// operator-facing message is shown and the form stays editable.
    pub fn complete_submission(
        &mut self,
        result: Result<(), ActionError>,
    ) -> Option<CompletedAction> {
        self.action_in_progress = false;
        self.outcome = None;

        match result {
            Ok(()) => {
                info!(action = %self.action, "runtime action completed");
                let target = self
                    .selected_target
                    .and_then(|index| self.deploy_targets.get(index))
                    .map(|target| target.name.clone())
                    .unwrap_or_default();
                let completed = CompletedAction {
                    action: self.action,
                    target,
                };
                self.open = false;
                Some(completed)
            }
            Err(err) => {
                debug!(action = %self.action, error = %err, "runtime action failed");
                self.error_message = Some(err.to_string());
                None
            }
        }
    }

    /// Validate and dispatch the action on a worker thread.
    pub fn submit(&mut self, ctx: &Context) {
        if self.action_in_progress {
            return;
        }

        if let Err(err) = self.validate() {
            self.error_message = Some(err.to_string());
            return;
        }

        self.begin_submission();

        let action = self.action;
        let login = self.login.clone();
        let app_base_url = self.app_base_url.clone();
        let process_id = self.model.id.clone();
        let process_key = self.model.key.clone();
        let deploy_url = self
            .selected_target
            .and_then(|index| self.deploy_targets.get(index))
            .map(|target| target.url.clone())
            .unwrap_or_default();

        let slot: OutcomeSlot = Arc::new(Mutex::new(None));
        self.outcome = Some(slot.clone());

        let ctx = ctx.clone();
        thread::spawn(move || {
            let result = match RuntimeClient::new(app_base_url) {
                Ok(client) => {
                    client.run_action(action, &deploy_url, &process_id, &process_key, &login)
                }
                Err(err) => {
                    debug!(error = %err, "failed to construct runtime client");
                    Err(ActionError::EngineUnavailable)
                }
            };

            match slot.lock() {
                Ok(mut guard) => *guard = Some(result),
                Err(_) => error!("outcome slot poisoned, dropping submission result"),
            }
            ctx.request_repaint();
        });
    }

    fn take_outcome(&mut self) -> Option<Result<(), ActionError>> {
        let slot = self.outcome.as_ref()?;
        slot.try_lock().ok().and_then(|mut guard| guard.take())
    }

    /// Show the dialog. Returns the completed action (once, on success) and
    /// the window rect for focus management.
    pub fn show(
        &mut self,
        ctx: &Context,
        window_pos: Option<egui::Pos2>,
    ) -> (Option<CompletedAction>, Option<egui::Rect>) {
        self.show_with_focus(ctx, window_pos, false)
    }

    pub fn show_with_focus(
        &mut self,
        ctx: &Context,
        window_pos: Option<egui::Pos2>,
        bring_to_front: bool,
    ) -> (Option<CompletedAction>, Option<egui::Rect>) {
        if !self.open {
            return (None, None);
        }

        // Poll the worker's outcome before rendering so the frame after
        // completion already shows the final state.
        if self.action_in_progress {
            if let Some(result) = self.take_outcome() {
                let completed = self.complete_submission(result);
                if completed.is_some() {
                    return (completed, None);
                }
            }
        }

        let mut window_open = self.open;
        let mut cancelled = false;
        let mut window_rect = None;

        let mut window = egui::Window::new(format!("{} Process Model", self.action.capitalized()))
            .open(&mut window_open)
            .resizable(false)
            .min_width(380.0)
            .default_size(Vec2::new(420.0, 260.0))
            .collapsible(false);

        if bring_to_front {
            window = window.order(egui::Order::Foreground);
        }

        if let Some(pos) = window_pos {
            window = window.current_pos(pos);
        } else if self.first_open {
            // Center on first open, overriding any remembered position
            let screen_rect = ctx.screen_rect();
            let window_size = Vec2::new(420.0, 260.0);
            window = window.current_pos(screen_rect.center() - window_size / 2.0);
            self.first_open = false;
        }

        if let Some(response) = window.show(ctx, |ui| {
            ui.label(format!(
                "Process model \"{}\" (key: {})",
                self.model.name, self.model.key
            ));
            ui.add_space(8.0);

            ui.add_enabled_ui(!self.action_in_progress, |ui| {
                egui::Grid::new("deploy_form_grid")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .striped(false)
                    .show(ui, |ui| {
                        ui.label("Environment:");
                        let selected_label = self
                            .selected_target
                            .and_then(|index| self.deploy_targets.get(index))
                            .map(|target| target.name.clone())
                            .unwrap_or_else(|| "Select environment".to_string());
                        egui::ComboBox::from_id_salt("deploy_target")
                            .selected_text(selected_label)
                            .width(220.0)
                            .show_ui(ui, |ui| {
                                for (index, target) in self.deploy_targets.iter().enumerate() {
                                    ui.selectable_value(
                                        &mut self.selected_target,
                                        Some(index),
                                        &target.name,
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Username:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.login.name).desired_width(220.0),
                        );
                        ui.end_row();

                        ui.label("Password:");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.login.password)
                                .password(true)
                                .desired_width(220.0),
                        );
                        ui.end_row();
                    });
            });

            ui.add_space(10.0);

            if self.action_in_progress {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new(self.progress_message()).strong());
                });
                ctx.request_repaint();
            } else if let Some(error) = &self.error_message {
                ui.add(egui::Label::new(
                    RichText::new(error).color(egui::Color32::from_rgb(220, 50, 50)),
                ));
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                let submit = ui.add_enabled(
                    !self.action_in_progress,
                    egui::Button::new(self.action.capitalized()),
                );
                if submit.clicked() {
                    self.submit(ui.ctx());
                }

                if ui
                    .add_enabled(!self.action_in_progress, egui::Button::new("Cancel"))
                    .clicked()
                {
                    cancelled = true;
                }
            });
        }) {
            window_rect = Some(response.response.rect);
        }

        if cancelled {
            self.cancel();
        } else {
            self.open = window_open;
        }

        (None, window_rect)
    }
}

impl FocusableWindow for DeployDialogWindow {
    type ShowParams = PositionShowParams;

    fn window_id(&self) -> &'static str {
        "deploy_dialog"
    }

    fn window_title(&self) -> String {
        format!("{} Process Model", self.action.capitalized())
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        params: Self::ShowParams,
        bring_to_front: bool,
    ) {
        self.show_with_focus(ctx, params, bring_to_front);
    }
}
