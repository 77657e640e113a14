//! Menu bar for the modeler window.

use crate::app::dashui::app::ThemeChoice;
use crate::app::runtime_client::RuntimeAction;
use eframe::egui;
use egui::RichText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    RunAction(RuntimeAction),
    Quit,
}

/// Build the menu bar. Deployment entries stay disabled until the current
/// model carries an id and a key.
pub fn build_menu(ui: &mut egui::Ui, theme: &mut ThemeChoice, model_actionable: bool) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("Model", |ui| {
        ui.add_enabled_ui(model_actionable, |ui| {
            if ui.button("Deploy…").clicked() {
                menu_action = MenuAction::RunAction(RuntimeAction::Deploy);
                ui.close();
            }
            if ui.button("Suspend…").clicked() {
                menu_action = MenuAction::RunAction(RuntimeAction::Suspend);
                ui.close();
            }
            if ui.button("Activate…").clicked() {
                menu_action = MenuAction::RunAction(RuntimeAction::Activate);
                ui.close();
            }
        });
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
            ui.close();
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            *theme = ThemeChoice::Mocha;
        }
    });

    if *theme != original_theme {
        menu_action = MenuAction::ThemeChanged;
    }

    menu_action
}
