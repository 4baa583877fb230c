use crate::core::{
    CardId,
    PhraseCategory,
};

// A simple ui action queue so widgets don't need mutable access to the session
// while the board is still being drawn.
#[derive(Debug, Clone)]
pub enum UiAction {
    // Board
    SelectCard(CardId),
    MoveCard { card_id: CardId, target: PhraseCategory, drop_y: f32 },

    // Export bar
    SetThreshold(f32),
    SaveDictionary,
    OpenMergePicker,

    // Merge picker
    MergeInto(u32),
    DeleteDictionary(u32),
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
