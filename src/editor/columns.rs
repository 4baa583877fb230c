use std::collections::HashMap;

use crate::{
    core::{
        Card,
        CardId,
        PhraseCategory,
    },
    editor::geometry::Rect,
};

/// Operation referenced a card id that is not in the working set. The column
/// ordering is untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCard(pub CardId);

/// The four ordered card containers. Order within a column is significant (it is
/// the export order) and only changes through explicit repositioning.
#[derive(Debug, Default)]
pub struct ColumnSet {
    columns: [Vec<Card>; 4],
}

fn index_of(category: PhraseCategory) -> usize {
    match category {
        PhraseCategory::Phrase => 0,
        PhraseCategory::Term => 1,
        PhraseCategory::Synonym => 2,
        PhraseCategory::Definition => 3,
    }
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mut card: Card, category: PhraseCategory) {
        card.category = category;
        self.columns[index_of(category)].push(card);
    }

    pub fn list(&self, category: PhraseCategory) -> &[Card] {
        &self.columns[index_of(category)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.columns.iter_mut().flatten()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.iter().find(|card| card.id == id)
    }

    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.iter_mut().find(|card| card.id == id)
    }

    pub fn category_of(&self, id: CardId) -> Option<PhraseCategory> {
        self.card(id).map(|card| card.category)
    }

    pub fn contains(&self, id: CardId) -> bool {
        self.card(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.columns.iter().map(|column| column.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|column| column.is_empty())
    }

    pub fn remove(&mut self, id: CardId) -> Result<Card, UnknownCard> {
        for column in &mut self.columns {
            if let Some(position) = column.iter().position(|card| card.id == id) {
                return Ok(column.remove(position));
            }
        }
        Err(UnknownCard(id))
    }

    pub fn insert(&mut self, category: PhraseCategory, index: usize, mut card: Card) {
        card.category = category;
        let column = &mut self.columns[index_of(category)];
        let index = index.min(column.len());
        column.insert(index, card);
    }

    /// Insertion index for a drop at `drop_y`: the position of the first visible
    /// card in the target column whose vertical midpoint lies below the pointer,
    /// or the end of the column if none does. Hidden cards never act as drop
    /// targets; cards without a recorded rectangle are skipped the same way.
    pub fn drop_index(
        &self,
        category: PhraseCategory,
        drop_y: f32,
        rects: &HashMap<CardId, Rect>,
    ) -> usize {
        let column = self.list(category);

        for (position, card) in column.iter().enumerate() {
            if !card.is_visible() {
                continue;
            }
            if let Some(rect) = rects.get(&card.id) {
                if drop_y < rect.top + rect.height / 2.0 {
                    return position;
                }
            }
        }

        column.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: CardId, score: f32) -> Card {
        Card::new(id, format!("card {}", id), score, None)
    }

    fn rect_at(top: f32) -> Rect {
        Rect::new(0.0, top, 100.0, 40.0)
    }

    #[test]
    fn drop_index_inserts_before_first_midpoint_below_pointer() {
        let mut columns = ColumnSet::new();
        columns.push(card(1, 0.9), PhraseCategory::Term);
        columns.push(card(2, 0.9), PhraseCategory::Term);
        columns.push(card(3, 0.9), PhraseCategory::Term);

        let mut rects = HashMap::new();
        rects.insert(1, rect_at(0.0));
        rects.insert(2, rect_at(50.0));
        rects.insert(3, rect_at(100.0));

        // Midpoints sit at 20, 70, 120.
        assert_eq!(columns.drop_index(PhraseCategory::Term, 10.0, &rects), 0);
        assert_eq!(columns.drop_index(PhraseCategory::Term, 60.0, &rects), 1);
        assert_eq!(columns.drop_index(PhraseCategory::Term, 200.0, &rects), 3);
    }

    #[test]
    fn drop_index_skips_hidden_cards() {
        let mut columns = ColumnSet::new();
        columns.push(card(1, 0.9), PhraseCategory::Term);
        columns.push(card(2, 0.1), PhraseCategory::Term);
        columns.card_mut(2).unwrap().hidden = true;

        let mut rects = HashMap::new();
        rects.insert(1, rect_at(0.0));
        rects.insert(2, rect_at(50.0));

        // The hidden card's midpoint never captures the pointer.
        assert_eq!(columns.drop_index(PhraseCategory::Term, 60.0, &rects), 2);
    }

    #[test]
    fn remove_unknown_card_is_a_precondition_failure() {
        let mut columns = ColumnSet::new();
        columns.push(card(1, 0.5), PhraseCategory::Phrase);

        assert_eq!(columns.remove(42).map(|c| c.id), Err(UnknownCard(42)));
        assert_eq!(columns.len(), 1);
    }
}
