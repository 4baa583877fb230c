use std::collections::HashMap;

use crate::{
    core::{
        Card,
        CardId,
        Connection,
        DictionarySnapshot,
        PhraseCategory,
        ScoredItem,
        SnapshotCard,
    },
    editor::{
        columns::{
            ColumnSet,
            UnknownCard,
        },
        geometry::Rect,
        graph::{
            ConnectError,
            ConnectionGraph,
        },
        threshold::ThresholdFilter,
    },
};

/// One editing session over one dictionary. Owns the columns, the connection
/// graph and the threshold; every UI gesture funnels through the command methods
/// here, so the session is fully exercisable without a rendering surface.
pub struct EditorSession {
    pub dictionary_id: Option<u32>,
    pub name: String,
    pub source_text: String,
    columns: ColumnSet,
    graph: ConnectionGraph,
    threshold: ThresholdFilter,
}

impl EditorSession {
    pub fn empty() -> Self {
        Self {
            dictionary_id: None,
            name: String::new(),
            source_text: String::new(),
            columns: ColumnSet::new(),
            graph: ConnectionGraph::new(),
            threshold: ThresholdFilter::new(),
        }
    }

    /// Start a session from freshly scored items; everything lands in the intake
    /// pool and the user sorts it out from there.
    pub fn from_intake(items: Vec<ScoredItem>, source_text: String) -> Self {
        let mut session = Self::empty();
        session.source_text = source_text;

        for item in items {
            session.columns.push(
                Card::new(item.id, item.text, item.tfidf, item.pattern),
                PhraseCategory::Phrase,
            );
        }

        session
    }

    /// Reopen a persisted dictionary. Connections whose endpoints are missing are
    /// skipped, not fatal: recovering most of a dictionary beats refusing to open
    /// it. The last card of the term column becomes the initial anchor.
    pub fn from_snapshot(snapshot: DictionarySnapshot) -> Self {
        let mut session = Self::empty();
        session.dictionary_id = snapshot.id;
        session.name = snapshot.name;
        session.source_text = snapshot.document_text;

        for record in snapshot.phrases {
            let card = Card::new(record.id, record.text, record.tfidf, record.pattern);
            session.columns.push(card, record.phrase_type);
        }

        for connection in snapshot.connections {
            if let Err(reason) =
                session.graph.connect(&mut session.columns, connection.from_id, connection.to_id)
            {
                eprintln!(
                    "[Load] Skipping connection {} -> {}: {}",
                    connection.from_id, connection.to_id, reason
                );
            }
        }

        session.apply_threshold(snapshot.tfidf_range);

        let initial_anchor =
            session.columns.list(PhraseCategory::Term).last().map(|card| card.id);
        if let Some(anchor) = initial_anchor {
            let _ = session.graph.set_anchor(&mut session.columns, anchor);
        }

        session
    }

    pub fn cards(&self, category: PhraseCategory) -> &[Card] {
        self.columns.list(category)
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.columns.card(id)
    }

    pub fn card_count(&self) -> usize {
        self.columns.len()
    }

    pub fn edges(&self) -> &[Connection] {
        self.graph.edges()
    }

    pub fn anchor(&self) -> Option<CardId> {
        self.graph.anchor()
    }

    pub fn threshold(&self) -> f32 {
        self.threshold.value()
    }

    /// Edges worth drawing: both endpoints currently visible. Edges touching a
    /// filtered or defocused card stay in the graph and resume rendering once
    /// their endpoints return.
    pub fn visible_edges(&self) -> Vec<Connection> {
        self.graph
            .edges()
            .iter()
            .filter(|edge| {
                self.card(edge.from_id).is_some_and(|card| card.is_visible())
                    && self.card(edge.to_id).is_some_and(|card| card.is_visible())
            })
            .copied()
            .collect()
    }

    /// Relocate a card to the drop point. The drag itself already severs every
    /// edge touching the card; landing outside the intake pool re-enters the
    /// anchor/pairing flow, landing in intake strips the card back to a plain
    /// scored phrase. A pairing rejection does not undo the move — it is
    /// reported so the adapter can show the notice.
    pub fn move_card(
        &mut self,
        id: CardId,
        target: PhraseCategory,
        drop_y: f32,
        rects: &HashMap<CardId, Rect>,
    ) -> Result<Option<ConnectError>, UnknownCard> {
        if !self.columns.contains(id) {
            return Err(UnknownCard(id));
        }

        self.graph.disconnect_all_for(&mut self.columns, id);
        self.graph.forget_pending(id);

        let card = self.columns.remove(id)?;
        let index = self.columns.drop_index(target, drop_y, rects);
        self.columns.insert(target, index, card);

        if self.anchor() == Some(id) && target != PhraseCategory::Term {
            self.graph.clear_anchor(&mut self.columns);
        }

        let rejection = if target.is_intake() {
            if let Some(card) = self.columns.card_mut(id) {
                card.connected = false;
                card.anchor_visible = true;
            }
            self.graph.recompute_focus(&mut self.columns);
            None
        } else {
            self.select_card(id).err()
        };

        Ok(rejection)
    }

    /// Click-selection, routed by column: terms become the anchor, satellites
    /// pair with it (or buffer until a term is chosen), intake cards do nothing.
    pub fn select_card(&mut self, id: CardId) -> Result<(), ConnectError> {
        match self.columns.category_of(id) {
            Some(PhraseCategory::Term) => self.graph.set_anchor(&mut self.columns, id),
            Some(PhraseCategory::Phrase) => Ok(()),
            Some(_) => self.graph.select_satellite(&mut self.columns, id),
            None => Err(ConnectError::UnknownCard(id)),
        }
    }

    /// Explicit pairing command. Unlike click-selection this never touches the
    /// anchor focus; only anchor changes re-derive which satellites are shown.
    pub fn connect(&mut self, from: CardId, to: CardId) -> Result<(), ConnectError> {
        self.graph.connect(&mut self.columns, from, to)
    }

    pub fn disconnect_all_for(&mut self, id: CardId) {
        self.graph.disconnect_all_for(&mut self.columns, id);
        self.graph.recompute_focus(&mut self.columns);
    }

    /// Returns the clamped, three-decimal value so slider and numeric entry can
    /// resynchronize on it.
    pub fn apply_threshold(&mut self, raw: f32) -> f32 {
        let value = self.threshold.set(raw);
        self.threshold.apply(&mut self.columns);
        value
    }

    /// Walk the columns in fixed order and emit the transfer shape. Order within
    /// each column reflects the manual drag history and is preserved.
    pub fn to_snapshot(&self) -> DictionarySnapshot {
        let mut phrases = Vec::with_capacity(self.columns.len());

        for category in PhraseCategory::ALL {
            for card in self.columns.list(category) {
                phrases.push(SnapshotCard {
                    id: card.id,
                    text: card.text.clone(),
                    tfidf: card.score,
                    pattern: card.pattern.clone(),
                    phrase_type: card.category,
                    hidden: card.hidden,
                });
            }
        }

        DictionarySnapshot {
            id: self.dictionary_id,
            name: self.name.clone(),
            phrases,
            connections: self.graph.edges().to_vec(),
            tfidf_range: self.threshold.value(),
            document_text: self.source_text.clone(),
        }
    }
}
