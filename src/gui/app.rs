use eframe::egui;

use crate::{
    core::tasks::{
        SaveOutcome,
        TaskManager,
        TaskResult,
    },
    editor::{
        graph::ConnectError,
        EditorSession,
    },
    gui::{
        actions::{
            ActionQueue,
            UiAction,
        },
        board::{
            board,
            BoardState,
        },
        export_bar::export_bar,
        merge_modal::{
            MergeAction,
            MergePickerModal,
        },
        notice_modal::NoticeModal,
        settings::{
            SettingsData,
            SettingsModal,
        },
        status_overlay::StatusOverlay,
        theme::{
            set_theme,
            Theme,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
        SETTINGS_FILE,
    },
};

/// Name sent with a merge request; the target dictionary keeps its own name and
/// the store ignores this one.
const MERGE_PLACEHOLDER_NAME: &str = "dict_for_merge";

pub struct TermlinkApp {
    // Editor state
    session: EditorSession,
    board_state: BoardState,
    actions: ActionQueue,

    // Configuration
    settings_data: SettingsData,

    // UI State
    theme: Theme,
    status: StatusOverlay,

    // Modals
    notice: NoticeModal,
    merge_picker: MergePickerModal,
    settings_modal: SettingsModal,

    task_manager: TaskManager,
}

impl TermlinkApp {
    pub fn new(cc: &eframe::CreationContext<'_>, session: EditorSession) -> Self {
        let settings_data = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let theme = Theme::dracula();

        set_theme(&cc.egui_ctx, theme.clone());
        apply_theme_preference(&cc.egui_ctx, settings_data.dark_mode);

        Self {
            session,
            board_state: BoardState::new(),
            actions: ActionQueue::new(),
            settings_data,
            theme,
            status: StatusOverlay::new(),
            notice: NoticeModal::new(),
            merge_picker: MergePickerModal::new(),
            settings_modal: SettingsModal::new(),
            task_manager: TaskManager::new(),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::StatusMessage(message) => {
                self.status.set_busy(message);
            }

            TaskResult::DictionarySaved(result) => match result {
                Ok(SaveOutcome::Created { dictionary_id, message }) => {
                    self.session.dictionary_id = Some(dictionary_id);
                    self.status.flash(message);
                }
                Ok(SaveOutcome::Updated { message }) => {
                    self.status.flash(message);
                }
                Err(error) => {
                    self.status.clear();
                    self.notice.show_failure(
                        "Save failed",
                        "The dictionary was not saved.",
                        error,
                    );
                }
            },

            TaskResult::DictionaryMerged { target_id: _, result } => match result {
                Ok(message) => self.status.flash(message),
                Err(error) => {
                    self.status.clear();
                    self.notice.show_failure(
                        "Merge failed",
                        "The dictionaries were not merged.",
                        error,
                    );
                }
            },

            TaskResult::DictionariesListed(result) => match result {
                Ok(dictionaries) => self.merge_picker.set_dictionaries(dictionaries),
                Err(error) => self.merge_picker.set_error(error),
            },

            TaskResult::DictionaryDeleted { id: _, result } => match result {
                Ok(message) => {
                    self.status.flash(message);
                    if self.merge_picker.is_open() {
                        self.task_manager
                            .list_dictionaries(self.settings_data.server_url.clone());
                    }
                }
                Err(error) => {
                    self.status.clear();
                    if self.merge_picker.is_open() {
                        self.merge_picker.set_error(error);
                    } else {
                        self.notice.show_failure(
                            "Delete failed",
                            "The dictionary was not deleted.",
                            error,
                        );
                    }
                }
            },
        }
    }

    fn apply_action(&mut self, action: UiAction) {
        match action {
            UiAction::SelectCard(card_id) => match self.session.select_card(card_id) {
                Ok(()) => {}
                // A stale click on a card that just moved away; nothing to tell.
                Err(ConnectError::UnknownCard(_)) => {}
                Err(reason) => {
                    self.notice.show_rejection("Cannot pair cards", reason.to_string());
                }
            },

            UiAction::MoveCard { card_id, target, drop_y } => {
                match self.session.move_card(card_id, target, drop_y, &self.board_state.rects) {
                    Ok(None) => {}
                    Ok(Some(ConnectError::UnknownCard(_))) => {}
                    Ok(Some(reason)) => {
                        // The move itself stands; only the automatic pairing was refused.
                        self.notice.show_rejection("Cannot pair cards", reason.to_string());
                    }
                    Err(_) => {}
                }
            }

            UiAction::SetThreshold(value) => {
                self.session.apply_threshold(value);
            }

            UiAction::SaveDictionary => {
                if self.session.name.trim().is_empty() {
                    self.notice.show_rejection(
                        "Name required",
                        "Give the dictionary a name before saving.",
                    );
                } else {
                    self.task_manager.save_dictionary(
                        self.settings_data.server_url.clone(),
                        self.session.to_snapshot(),
                    );
                }
            }

            UiAction::OpenMergePicker => {
                self.merge_picker.open_picker();
                self.task_manager.list_dictionaries(self.settings_data.server_url.clone());
            }

            UiAction::MergeInto(target_id) => {
                let mut snapshot = self.session.to_snapshot();
                snapshot.name = MERGE_PLACEHOLDER_NAME.to_string();
                self.task_manager.merge_dictionary(
                    self.settings_data.server_url.clone(),
                    target_id,
                    snapshot,
                );
            }

            UiAction::DeleteDictionary(id) => {
                self.task_manager
                    .delete_dictionary(self.settings_data.server_url.clone(), id);
            }
        }
    }

    fn show_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Termlink").strong());
                ui.separator();

                if let Some(anchor) =
                    self.session.anchor().and_then(|id| self.session.card(id))
                {
                    ui.weak(format!("Anchor: {}", anchor.text));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Settings").clicked() {
                        self.settings_modal.open_settings(self.settings_data.clone());
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn save_settings(&self) {
        if let Err(e) = save_json(&self.settings_data, SETTINGS_FILE) {
            eprintln!("[Settings] Failed to save: {}", e);
        }
    }
}

fn apply_theme_preference(ctx: &egui::Context, dark_mode: bool) {
    ctx.options_mut(|options| {
        options.theme_preference = if dark_mode {
            egui::ThemePreference::Dark
        } else {
            egui::ThemePreference::Light
        };
    });
}

impl eframe::App for TermlinkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();
        for result in task_results {
            self.handle_task_result(result);
        }

        self.show_top_bar(ctx);
        export_bar(ctx, &mut self.session, &mut self.actions);
        board(ctx, &self.session, &mut self.board_state, &self.theme, &mut self.actions);

        if let Some(action) =
            self.merge_picker.show(ctx, self.session.dictionary_id, &self.theme)
        {
            match action {
                MergeAction::Merge(target_id) => {
                    self.actions.push(UiAction::MergeInto(target_id));
                }
                MergeAction::Delete(id) => {
                    self.actions.push(UiAction::DeleteDictionary(id));
                }
            }
        }

        if let Some(settings) = self.settings_modal.show(ctx) {
            apply_theme_preference(ctx, settings.dark_mode);
            self.settings_data = settings;
            self.save_settings();
        }

        self.notice.show(ctx, &self.theme);
        self.status.show(ctx);

        let pending: Vec<UiAction> = self.actions.drain().collect();
        for action in pending {
            self.apply_action(action);
        }
    }
}
