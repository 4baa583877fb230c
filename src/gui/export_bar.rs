use eframe::egui;

use crate::{
    editor::EditorSession,
    gui::actions::{
        ActionQueue,
        UiAction,
    },
};

/// Bottom panel with the dictionary name, the relevance cutoff controls and the
/// store buttons. Slider and numeric entry share the session's threshold, which
/// comes back clamped and rounded so both widgets resynchronize every frame.
pub fn export_bar(ctx: &egui::Context, session: &mut EditorSession, actions: &mut ActionQueue) {
    egui::TopBottomPanel::bottom("export_bar").show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.add(egui::TextEdit::singleline(&mut session.name).desired_width(200.0));

            ui.separator();

            ui.label("Threshold:");
            let mut slider_value = session.threshold();
            if ui
                .add(egui::Slider::new(&mut slider_value, 0.0..=1.0).fixed_decimals(3))
                .changed()
            {
                actions.push(UiAction::SetThreshold(slider_value));
            }

            let mut entry_value = session.threshold();
            if ui
                .add(
                    egui::DragValue::new(&mut entry_value)
                        .range(0.0..=1.0)
                        .speed(0.005)
                        .fixed_decimals(3),
                )
                .changed()
            {
                actions.push(UiAction::SetThreshold(entry_value));
            }

            ui.separator();

            let save_label = match session.dictionary_id {
                Some(_) => "Update",
                None => "Save",
            };
            if ui.button(save_label).clicked() {
                actions.push(UiAction::SaveDictionary);
            }

            if ui.button("Merge into...").clicked() {
                actions.push(UiAction::OpenMergePicker);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match session.dictionary_id {
                    Some(id) => ui.weak(format!("Dictionary #{}", id)),
                    None => ui.weak("Not saved yet"),
                };
            });
        });
        ui.add_space(6.0);
    });
}
