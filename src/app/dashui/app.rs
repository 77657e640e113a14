//! Main application shell: menu bar, model form, status bar and window
//! wiring.

use crate::app::dashui::deploy_dialog_window::DeployDialogWindow;
use crate::app::dashui::menu::{self, MenuAction};
use crate::app::dashui::window_focus::WindowFocusManager;
use crate::app::deploy_config::DeployConfig;
use crate::app::notifications::{Notification, NotificationManager};
use crate::app::process_model::ProcessModel;
use eframe::egui;
use tracing::info;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FlowDashApp {
    pub theme: ThemeChoice,

    /// The process model currently open in the modeler.
    pub model: ProcessModel,

    #[serde(skip)]
    pub deploy_config: DeployConfig,

    #[serde(skip)]
    pub deploy_dialog: DeployDialogWindow,

    #[serde(skip)]
    pub notifications: NotificationManager,

    #[serde(skip)]
    pub window_focus_manager: WindowFocusManager,

    #[serde(skip)]
    notification_seq: u64,
}

impl Default for FlowDashApp {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            model: ProcessModel::default(),
            deploy_config: DeployConfig::default(),
            deploy_dialog: DeployDialogWindow::default(),
            notifications: NotificationManager::new(),
            window_focus_manager: WindowFocusManager::new(),
            notification_seq: 0,
        }
    }
}

impl FlowDashApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: FlowDashApp = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // Deploy targets are re-read at startup, never persisted with the app
        app.deploy_config = DeployConfig::load();
        info!(
            targets = app.deploy_config.deploy_urls.len(),
            "loaded deploy target configuration"
        );

        app.apply_theme(&cc.egui_ctx);
        app
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        match self.theme {
            ThemeChoice::Latte => catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE),
            ThemeChoice::Frappe => catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE),
            ThemeChoice::Macchiato => catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO),
            ThemeChoice::Mocha => catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA),
        }
    }

    fn handle_menu_action(&mut self, ctx: &egui::Context, action: MenuAction) {
        match action {
            MenuAction::None => {}
            MenuAction::ThemeChanged => self.apply_theme(ctx),
            MenuAction::RunAction(runtime_action) => {
                info!(action = %runtime_action, model_key = %self.model.key, "opening deploy dialog");
                self.deploy_dialog
                    .open_for(runtime_action, self.model.clone(), &self.deploy_config);
                self.window_focus_manager
                    .request_focus("deploy_dialog".to_string());
            }
            MenuAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    fn render_model_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Process Model");
        ui.add_space(8.0);

        egui::Grid::new("model_form_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name:");
                ui.add(egui::TextEdit::singleline(&mut self.model.name).desired_width(260.0));
                ui.end_row();

                ui.label("Key:");
                ui.add(egui::TextEdit::singleline(&mut self.model.key).desired_width(260.0));
                ui.end_row();

                ui.label("Model id:");
                ui.add(egui::TextEdit::singleline(&mut self.model.id).desired_width(260.0));
                ui.end_row();
            });

        if !self.model.is_actionable() {
            ui.add_space(8.0);
            ui.label("Give the model an id and a key to enable deployment actions.");
        }
    }

    fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.model.is_actionable() {
                    ui.label(format!("Model: {}", self.model.key));
                } else {
                    ui.label("No deployable model");
                }

                ui.separator();
                ui.label(format!(
                    "{} deploy target(s)",
                    self.deploy_config.deploy_urls.len()
                ));

                self.notifications.render_status_bar(ui);
            });
        });
    }
}

impl eframe::App for FlowDashApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let action = menu::build_menu(ui, &mut self.theme, self.model.is_actionable());
                self.handle_menu_action(ctx, action);
            });
        });

        self.render_status_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_model_form(ui);
        });

        let bring_to_front = self.window_focus_manager.should_focus("deploy_dialog");
        let (completed, _rect) = self.deploy_dialog.show_with_focus(ctx, None, bring_to_front);
        self.window_focus_manager.clear_focus("deploy_dialog");

        if let Some(completed) = completed {
            self.notification_seq += 1;
            let message = if completed.target.is_empty() {
                completed.message()
            } else {
                format!("{} ({})", completed.message(), completed.target)
            };
            self.notifications.add(Notification::new_success(
                format!("deployment_{}", self.notification_seq),
                message,
                "Deployment".to_string(),
            ));
        }
    }
}
