use eframe::egui;

use crate::gui::theme::Theme;

/// What the notice reports. A rejection is a pairing or input rule refusing a
/// gesture; the editor state is unchanged and there is nothing technical to
/// show. A failure is a store request that went wrong and carries the raw
/// error for the curious.
#[derive(Clone, Copy, PartialEq, Eq)]
enum NoticeKind {
    Rejection,
    Failure,
}

#[derive(Clone)]
struct NoticeData {
    kind: NoticeKind,
    title: String,
    message: String,
    details: Option<String>,
}

/// Blocking modal over the board; one notice at a time, newest wins.
pub struct NoticeModal {
    data: Option<NoticeData>,
}

impl NoticeModal {
    pub fn new() -> Self {
        Self { data: None }
    }

    pub fn show_rejection(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.data = Some(NoticeData {
            kind: NoticeKind::Rejection,
            title: title.into(),
            message: message.into(),
            details: None,
        });
    }

    /// The message is the store's (or transport's) own wording, surfaced
    /// verbatim in the collapsible details under a short summary.
    pub fn show_failure(
        &mut self,
        title: impl Into<String>,
        summary: impl Into<String>,
        details: impl Into<String>,
    ) {
        self.data = Some(NoticeData {
            kind: NoticeKind::Failure,
            title: title.into(),
            message: summary.into(),
            details: Some(details.into()),
        });
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        let Some(data) = self.data.clone() else {
            return;
        };

        let accent = match data.kind {
            NoticeKind::Rejection => theme.anchor_accent(),
            NoticeKind::Failure => theme.error(),
        };

        let modal = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(accent));
                ui.label(egui::RichText::new(&data.title).size(18.0).strong());
            });

            ui.add_space(10.0);

            ui.label(egui::RichText::new(&data.message).size(14.0));

            if let Some(details) = &data.details {
                ui.add_space(10.0);
                ui.collapsing("Technical Details", |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut details.as_str())
                            .desired_width(f32::INFINITY)
                            .desired_rows(4)
                            .code_editor(),
                    );
                });
            }

            ui.add_space(15.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.data = None;
        }
    }
}

impl Default for NoticeModal {
    fn default() -> Self {
        Self::new()
    }
}
