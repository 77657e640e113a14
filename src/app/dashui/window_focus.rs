//! Trait-based window focus management.
//!
//! Windows implement [`FocusableWindow`] so the app can bring any of them to
//! the foreground with one mechanism instead of ad-hoc per-window flags.

use eframe::egui;

/// Parameter type for windows positioned by the caller.
pub type PositionShowParams = Option<egui::Pos2>;

/// A window that can be brought to the foreground.
pub trait FocusableWindow {
    /// Parameters the window's show method needs; `()` for simple windows.
    type ShowParams;

    /// Unique identifier, stable across frames.
    fn window_id(&self) -> &'static str;

    /// Title as it appears in the title bar.
    fn window_title(&self) -> String;

    fn is_open(&self) -> bool;

    /// Render the window; with `bring_to_front` set it must use
    /// `egui::Order::Foreground`.
    fn show_with_focus(
        &mut self,
        ctx: &egui::Context,
        params: Self::ShowParams,
        bring_to_front: bool,
    );
}

/// Tracks which window should be raised on the next frame.
#[derive(Default)]
pub struct WindowFocusManager {
    bring_to_front_window: Option<String>,
}

impl WindowFocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_focus(&mut self, window_id: String) {
        self.bring_to_front_window = Some(window_id);
    }

    pub fn should_focus(&self, window_id: &str) -> bool {
        self.bring_to_front_window.as_deref() == Some(window_id)
    }

    /// Call after the focused window has been rendered with foreground
    /// ordering; a one-frame raise is enough for egui to keep it on top.
    pub fn clear_focus(&mut self, window_id: &str) {
        if self.should_focus(window_id) {
            self.bring_to_front_window = None;
        }
    }
}
