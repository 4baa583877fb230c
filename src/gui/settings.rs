use eframe::egui;

fn default_server_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_dark_mode() -> bool {
    true
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct SettingsData {
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { server_url: default_server_url(), dark_mode: default_dark_mode() }
    }
}

pub struct SettingsModal {
    open: bool,
    draft: SettingsData,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self { open: false, draft: SettingsData::default() }
    }

    pub fn open_settings(&mut self, current: SettingsData) {
        self.draft = current;
        self.open = true;
    }

    /// Returns the edited settings when the user saves them.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved = None;

        let modal = egui::Modal::new(egui::Id::new("settings_modal")).show(ctx, |ui| {
            ui.set_width(400.0);
            ui.heading("Settings");
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Dictionary store URL:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.draft.server_url)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.checkbox(&mut self.draft.dark_mode, "Dark mode");

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Save").clicked() {
                        saved = Some(self.draft.clone());
                        ui.close();
                    }
                    if ui.button("Cancel").clicked() {
                        ui.close();
                    }
                });
            });
        });

        if modal.should_close() {
            self.open = false;
        }

        saved
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
