use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

const FLASH_DURATION: Duration = Duration::from_millis(2500);

/// Non-blocking status corner. Store requests run in the background and editing
/// continues, so progress and results are shown in a small anchored window
/// instead of a blocking overlay.
pub struct StatusOverlay {
    message: Option<String>,
    busy: bool,
    expires_at: Option<Instant>,
}

impl StatusOverlay {
    pub fn new() -> Self {
        Self { message: None, busy: false, expires_at: None }
    }

    /// A request is in flight; stays up until cleared or replaced.
    pub fn set_busy(&mut self, message: String) {
        self.message = Some(message);
        self.busy = true;
        self.expires_at = None;
    }

    /// A short-lived result notice.
    pub fn flash(&mut self, message: String) {
        self.message = Some(message);
        self.busy = false;
        self.expires_at = Some(Instant::now() + FLASH_DURATION);
    }

    pub fn clear(&mut self) {
        self.message = None;
        self.busy = false;
        self.expires_at = None;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if let Some(expires_at) = self.expires_at {
            if Instant::now() >= expires_at {
                self.clear();
            } else {
                ctx.request_repaint_after(expires_at - Instant::now());
            }
        }

        let Some(message) = &self.message else {
            return;
        };

        egui::Window::new("status_overlay")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::Vec2::new(-12.0, -12.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if self.busy {
                        ui.add(egui::Spinner::new());
                    }
                    ui.label(message);
                });
            });
    }
}

impl Default for StatusOverlay {
    fn default() -> Self {
        Self::new()
    }
}
