use crate::editor::columns::ColumnSet;

/// Relevance cutoff in `[0, 1]`. The slider and the numeric entry both feed
/// `set`, which clamps and rounds to three decimals so the two widgets can stay
/// in lockstep on the same value.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdFilter {
    value: f32,
}

impl Default for ThresholdFilter {
    fn default() -> Self {
        Self { value: 0.0 }
    }
}

impl ThresholdFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set(&mut self, raw: f32) -> f32 {
        let raw = if raw.is_nan() { 0.0 } else { raw };
        self.value = (raw.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
        self.value
    }

    /// Re-derive every card's hidden flag. Filtering never touches edges; a
    /// filtered-out endpoint only suppresses rendering until it is back.
    pub fn apply(&self, columns: &mut ColumnSet) {
        for card in columns.iter_mut() {
            card.hidden = card.score < self.value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        Card,
        PhraseCategory,
    };

    fn columns_with_scores(scores: &[f32]) -> ColumnSet {
        let mut columns = ColumnSet::new();
        for (index, score) in scores.iter().enumerate() {
            columns.push(
                Card::new(index as u32, format!("card {}", index), *score, None),
                PhraseCategory::Phrase,
            );
        }
        columns
    }

    #[test]
    fn hides_cards_scoring_below_the_cutoff() {
        let mut columns = columns_with_scores(&[0.2, 0.5, 0.8]);
        let mut filter = ThresholdFilter::new();

        filter.set(0.5);
        filter.apply(&mut columns);

        let hidden: Vec<bool> =
            columns.list(PhraseCategory::Phrase).iter().map(|c| c.hidden).collect();
        assert_eq!(hidden, vec![true, false, false]);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut columns = columns_with_scores(&[0.1, 0.4, 0.9]);
        let mut filter = ThresholdFilter::new();
        filter.set(0.4);

        filter.apply(&mut columns);
        let first: Vec<bool> =
            columns.list(PhraseCategory::Phrase).iter().map(|c| c.hidden).collect();

        filter.apply(&mut columns);
        let second: Vec<bool> =
            columns.list(PhraseCategory::Phrase).iter().map(|c| c.hidden).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_input_clamps() {
        let mut filter = ThresholdFilter::new();

        assert_eq!(filter.set(1.7), 1.0);
        assert_eq!(filter.set(-0.3), 0.0);
        assert_eq!(filter.set(f32::NAN), 0.0);
    }

    #[test]
    fn value_rounds_to_three_decimals() {
        let mut filter = ThresholdFilter::new();

        assert_eq!(filter.set(0.12345), 0.123);
        assert_eq!(filter.set(0.87654), 0.877);
    }
}
