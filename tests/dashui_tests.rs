#[cfg(test)]
mod tests {
    use flowdash::app::dashui::app::{FlowDashApp, ThemeChoice};
    use flowdash::app::dashui::menu::MenuAction;
    use flowdash::app::runtime_client::RuntimeAction;

    #[test]
    fn test_app_default() {
        let app = FlowDashApp::default();

        assert!(matches!(app.theme, ThemeChoice::Latte));
        assert!(!app.deploy_dialog.open);
        assert!(app.notifications.is_empty());
        assert!(!app.model.is_actionable());
        assert!(app.deploy_config.deploy_urls.is_empty());
    }

    #[test]
    fn test_theme_choice_default() {
        let theme = ThemeChoice::default();
        assert!(matches!(theme, ThemeChoice::Latte));
    }

    #[test]
    fn test_theme_choice_display() {
        assert_eq!(ThemeChoice::Latte.to_string(), "Latte");
        assert_eq!(ThemeChoice::Mocha.to_string(), "Mocha");
    }

    #[test]
    fn test_menu_action_equality() {
        assert_eq!(
            MenuAction::RunAction(RuntimeAction::Deploy),
            MenuAction::RunAction(RuntimeAction::Deploy)
        );
        assert_ne!(
            MenuAction::RunAction(RuntimeAction::Deploy),
            MenuAction::RunAction(RuntimeAction::Suspend)
        );
        assert_ne!(MenuAction::Quit, MenuAction::None);
    }

    #[test]
    fn test_app_serialization_skips_transient_state() {
        let mut app = FlowDashApp::default();
        app.theme = ThemeChoice::Mocha;
        app.model.id = "37".to_string();
        app.model.key = "invoice".to_string();
        app.deploy_dialog.open = true;

        let serialized = serde_json::to_string(&app).unwrap();
        let deserialized: FlowDashApp = serde_json::from_str(&serialized).unwrap();

        // Persisted fields survive
        assert!(matches!(deserialized.theme, ThemeChoice::Mocha));
        assert_eq!(deserialized.model.key, "invoice");

        // Transient state is reset: no dialog or notifications carry over
        assert!(!deserialized.deploy_dialog.open);
        assert!(deserialized.notifications.is_empty());
    }
}
