use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::DictionarySummary,
    gui::theme::Theme,
};

#[derive(Debug, Clone, Copy)]
pub enum MergeAction {
    Merge(u32),
    Delete(u32),
}

/// Picker over the store's dictionary listing. Rows arrive asynchronously after
/// the picker opens; the current dictionary is never offered as a merge target.
pub struct MergePickerModal {
    open: bool,
    loading: bool,
    error: Option<String>,
    dictionaries: Vec<DictionarySummary>,
}

impl MergePickerModal {
    pub fn new() -> Self {
        Self { open: false, loading: false, error: None, dictionaries: Vec::new() }
    }

    pub fn open_picker(&mut self) {
        self.open = true;
        self.loading = true;
        self.error = None;
        self.dictionaries.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_dictionaries(&mut self, dictionaries: Vec<DictionarySummary>) {
        self.loading = false;
        self.dictionaries = dictionaries;
    }

    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        current_id: Option<u32>,
        theme: &Theme,
    ) -> Option<MergeAction> {
        if !self.open {
            return None;
        }

        let mut action = None;

        let modal = egui::Modal::new(egui::Id::new("merge_picker")).show(ctx, |ui| {
            ui.set_width(520.0);
            ui.heading("Merge into another dictionary");
            ui.add_space(10.0);

            if self.loading {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading dictionaries...");
                });
            } else if let Some(error) = &self.error {
                ui.colored_label(theme.error(), error);
            } else {
                let targets: Vec<&DictionarySummary> = self
                    .dictionaries
                    .iter()
                    .filter(|summary| Some(summary.id) != current_id)
                    .collect();

                if targets.is_empty() {
                    ui.label("No other dictionaries in the store.");
                } else {
                    self.show_table(ui, &targets, theme, &mut action);
                }
            }

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Close").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        if let Some(MergeAction::Merge(_)) = action {
            self.open = false;
        }
        if let Some(MergeAction::Delete(_)) = action {
            // The listing is stale now; the refreshed rows come back async.
            self.loading = true;
        }

        action
    }

    fn show_table(
        &self,
        ui: &mut egui::Ui,
        targets: &[&DictionarySummary],
        theme: &Theme,
        action: &mut Option<MergeAction>,
    ) {
        let text_height =
            egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder().at_least(120.0))
            .column(Column::auto().at_least(110.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(50.0))
            .column(Column::auto().at_least(120.0))
            .header(25.0, |mut header| {
                header.col(|ui| {
                    ui.label(theme.heading("Name"));
                });
                header.col(|ui| {
                    ui.label(theme.heading("Created"));
                });
                header.col(|ui| {
                    ui.label(theme.heading("Terms"));
                });
                header.col(|ui| {
                    ui.label(theme.heading("Links"));
                });
                header.col(|_ui| {});
            })
            .body(|mut body| {
                body.rows(text_height + 6.0, targets.len(), |mut row| {
                    let summary = targets[row.index()];
                    row.col(|ui| {
                        ui.label(&summary.name);
                    });
                    row.col(|ui| {
                        ui.label(summary.created_at_label());
                    });
                    row.col(|ui| {
                        ui.label(summary.terms_count.to_string());
                    });
                    row.col(|ui| {
                        ui.label(summary.connections_count.to_string());
                    });
                    row.col(|ui| {
                        if ui.button("Merge").clicked() {
                            *action = Some(MergeAction::Merge(summary.id));
                        }
                        if ui.button("Delete").clicked() {
                            *action = Some(MergeAction::Delete(summary.id));
                        }
                    });
                });
            });
    }
}

impl Default for MergePickerModal {
    fn default() -> Self {
        Self::new()
    }
}
