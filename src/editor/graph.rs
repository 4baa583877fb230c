use std::fmt;

use crate::{
    core::{
        CardId,
        Connection,
        PhraseCategory,
    },
    editor::columns::ColumnSet,
};

/// Why a pairing was refused. Rejections are total: nothing is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectError {
    SameColumn,
    IntakeEndpoint,
    Duplicate,
    UnknownCard(CardId),
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectError::SameColumn => {
                write!(f, "Only cards from different columns can be paired")
            }
            ConnectError::IntakeEndpoint => {
                write!(f, "Cards in the phrase column cannot be paired")
            }
            ConnectError::Duplicate => write!(f, "These cards are already paired"),
            ConnectError::UnknownCard(id) => write!(f, "No card with id {}", id),
        }
    }
}

/// Validated edge set over card ids plus the anchor/pending selection state.
///
/// Pairing is two-phase and order-tolerant: pick the term first and satellites
/// connect as they are clicked, or pick satellites first and they buffer in a
/// pending group that flushes as one batch when a term becomes the anchor. Both
/// orders end with the same edges.
#[derive(Debug, Default)]
pub struct ConnectionGraph {
    edges: Vec<Connection>,
    anchor: Option<CardId>,
    pending: Vec<CardId>,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edges(&self) -> &[Connection] {
        &self.edges
    }

    pub fn anchor(&self) -> Option<CardId> {
        self.anchor
    }

    fn has_edge_touching(&self, id: CardId) -> bool {
        self.edges.iter().any(|edge| edge.touches(id))
    }

    /// Insert the edge `{from, to}` after checking all pairing invariants. On
    /// success both endpoints get their connected mark.
    pub fn connect(&mut self, columns: &mut ColumnSet, from: CardId, to: CardId) -> Result<(), ConnectError> {
        let from_category =
            columns.category_of(from).ok_or(ConnectError::UnknownCard(from))?;
        let to_category = columns.category_of(to).ok_or(ConnectError::UnknownCard(to))?;

        // A self-loop trivially sits in one column.
        if from == to || from_category == to_category {
            return Err(ConnectError::SameColumn);
        }

        if from_category.is_intake() || to_category.is_intake() {
            return Err(ConnectError::IntakeEndpoint);
        }

        let candidate = Connection::new(from, to);
        if self.edges.contains(&candidate) {
            return Err(ConnectError::Duplicate);
        }

        self.edges.push(candidate);

        if let Some(card) = columns.card_mut(from) {
            card.connected = true;
        }
        if let Some(card) = columns.card_mut(to) {
            card.connected = true;
        }

        Ok(())
    }

    /// Remove every edge touching `id`. For each removed edge the untouched
    /// endpoint keeps its connected mark only while some other edge still holds it.
    pub fn disconnect_all_for(&mut self, columns: &mut ColumnSet, id: CardId) {
        let removed: Vec<Connection> =
            self.edges.iter().filter(|edge| edge.touches(id)).copied().collect();
        self.edges.retain(|edge| !edge.touches(id));

        for edge in removed {
            if let Some(other) = edge.other(id) {
                if !self.has_edge_touching(other) {
                    if let Some(card) = columns.card_mut(other) {
                        card.connected = false;
                    }
                }
            }
        }

        if let Some(card) = columns.card_mut(id) {
            card.connected = false;
        }
    }

    /// Make `term_id` the active anchor. The previous anchor loses its highlight
    /// unless edges still hold it. A pending satellite group flushes into the new
    /// anchor as one batch, but only when the anchor has no outgoing edges yet.
    pub fn set_anchor(&mut self, columns: &mut ColumnSet, term_id: CardId) -> Result<(), ConnectError> {
        match columns.category_of(term_id) {
            Some(PhraseCategory::Term) => {}
            Some(_) => return Err(ConnectError::SameColumn),
            None => return Err(ConnectError::UnknownCard(term_id)),
        }

        // The previous anchor's highlight always clears, even when edges hold it.
        if let Some(previous) = self.anchor {
            if previous != term_id {
                if let Some(card) = columns.card_mut(previous) {
                    card.connected = false;
                }
            }
        }

        self.anchor = Some(term_id);
        if let Some(card) = columns.card_mut(term_id) {
            card.connected = true;
        }

        if !self.pending.is_empty() && !self.has_edge_touching(term_id) {
            let pending = std::mem::take(&mut self.pending);
            for satellite in pending {
                // Stale or duplicate selections are dropped silently; the batch
                // is best-effort by design.
                if let Err(reason) = self.connect(columns, term_id, satellite) {
                    eprintln!("[Graph] Skipping pending card {}: {}", satellite, reason);
                }
            }
        }

        self.recompute_focus(columns);
        Ok(())
    }

    /// Select a synonym/definition card for pairing. With an anchor active the
    /// edge is created immediately; without one the card joins the pending group.
    pub fn select_satellite(&mut self, columns: &mut ColumnSet, id: CardId) -> Result<(), ConnectError> {
        match columns.category_of(id) {
            Some(category) if category.is_intake() => {
                return Err(ConnectError::IntakeEndpoint)
            }
            Some(PhraseCategory::Term) => return Err(ConnectError::SameColumn),
            Some(_) => {}
            None => return Err(ConnectError::UnknownCard(id)),
        }

        if let Some(card) = columns.card_mut(id) {
            card.connected = true;
        }

        match self.anchor {
            Some(anchor) => {
                self.pending.clear();
                let result = self.connect(columns, anchor, id);
                self.recompute_focus(columns);
                result
            }
            None => {
                if !self.pending.contains(&id) {
                    self.pending.push(id);
                }
                Ok(())
            }
        }
    }

    /// The anchor was removed from play (moved into intake); its satellites keep
    /// their edges but the focus derivation resets to show everything.
    pub fn clear_anchor(&mut self, columns: &mut ColumnSet) {
        self.anchor = None;
        self.recompute_focus(columns);
    }

    pub fn forget_pending(&mut self, id: CardId) {
        self.pending.retain(|pending| *pending != id);
    }

    /// Derive anchor-focus visibility for satellite columns: a card with edges is
    /// shown only when one of them reaches the current anchor; a card with no
    /// edges is left alone. Without an anchor there is no focus and every card
    /// shows. Phrase and term columns are never focus-filtered.
    pub fn recompute_focus(&mut self, columns: &mut ColumnSet) {
        let anchor = self.anchor;
        let edges = self.edges.clone();

        for card in columns.iter_mut() {
            if matches!(card.category, PhraseCategory::Phrase | PhraseCategory::Term) {
                card.anchor_visible = true;
                continue;
            }

            card.anchor_visible = match anchor {
                None => true,
                Some(anchor) => {
                    let touching: Vec<&Connection> =
                        edges.iter().filter(|edge| edge.touches(card.id)).collect();
                    touching.is_empty()
                        || touching.iter().any(|edge| edge.other(card.id) == Some(anchor))
                }
            };
        }
    }
}
