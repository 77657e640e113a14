//! Status-bar notifications for deployment outcomes.
//!
//! Only successes are announced here; submission failures stay inline in the
//! deploy dialog so the operator can correct the form and retry.

use egui::Color32;
use std::collections::HashMap;
use std::time::{Duration, Instant};

const SUCCESS_COLOR: Color32 = Color32::from_rgb(40, 180, 40);

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub created_at: Instant,
    pub expires_at: Instant,
    /// Originating subsystem, e.g. "Deployment".
    pub source: String,
}

impl Notification {
    pub fn new_success(id: String, message: String, source: String) -> Self {
        Notification {
            id,
            message,
            created_at: Instant::now(),
            expires_at: Instant::now() + Duration::from_secs(8),
            source,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

#[derive(Default)]
pub struct NotificationManager {
    notifications: HashMap<String, Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, notification: Notification) {
        self.notifications
            .insert(notification.id.clone(), notification);
    }

    pub fn dismiss(&mut self, id: &str) {
        self.notifications.remove(id);
    }

    pub fn clear_expired(&mut self) {
        self.notifications
            .retain(|_, notification| !notification.is_expired());
    }

    /// Active notifications, newest first.
    pub fn active(&self) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self.notifications.values().collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Render the notification strip inside the bottom status bar.
    pub fn render_status_bar(&mut self, ui: &mut egui::Ui) {
        self.clear_expired();

        if self.notifications.is_empty() {
            return;
        }

        let mut dismissed: Option<String> = None;
        for notification in self.active() {
            ui.separator();
            ui.horizontal(|ui| {
                ui.colored_label(SUCCESS_COLOR, "✓");
                ui.colored_label(SUCCESS_COLOR, &notification.message);
                if ui.small_button("Dismiss").clicked() {
                    dismissed = Some(notification.id.clone());
                }
            });
        }

        if let Some(id) = dismissed {
            self.dismiss(&id);
        }
    }
}
