//! Desktop user interface for FlowDash.
//!
//! The UI follows a window-per-feature layout: the main shell in [`app`]
//! renders the menu bar, the model form and the status bar, and feature
//! windows implement [`window_focus::FocusableWindow`] so the shell can raise
//! them consistently. The deploy dialog in [`deploy_dialog_window`] is the
//! only modal window; it owns every piece of state that exists while a
//! deployment submission is in flight.

pub mod app;
pub mod deploy_dialog_window;
pub mod menu;
pub mod window_focus;

pub use app::FlowDashApp;
pub use deploy_dialog_window::{CompletedAction, DeployDialogWindow};
