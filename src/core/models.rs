use serde::{
    Deserialize,
    Serialize,
};

pub type CardId = u32;

/// Which column owns a card structurally. `Phrase` is the intake pool: cards land
/// there when scored items are loaded and it never participates in connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhraseCategory {
    Phrase,
    Term,
    Synonym,
    Definition,
}

impl PhraseCategory {
    pub const ALL: [PhraseCategory; 4] = [
        PhraseCategory::Phrase,
        PhraseCategory::Term,
        PhraseCategory::Synonym,
        PhraseCategory::Definition,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PhraseCategory::Phrase => "Phrases",
            PhraseCategory::Term => "Terms",
            PhraseCategory::Synonym => "Synonyms",
            PhraseCategory::Definition => "Definitions",
        }
    }

    pub fn is_intake(&self) -> bool {
        matches!(self, PhraseCategory::Phrase)
    }
}

/// One scored phrase placed in exactly one column. `score` and `text` are fixed at
/// creation; `hidden` is derived from the threshold and `connected`/`anchor_visible`
/// from edge membership, so the whole visual state is inspectable without a view.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: CardId,
    pub text: String,
    pub score: f32,
    pub pattern: Option<String>,
    pub category: PhraseCategory,
    pub hidden: bool,
    pub connected: bool,
    pub anchor_visible: bool,
}

impl Card {
    pub fn new(id: CardId, text: String, score: f32, pattern: Option<String>) -> Self {
        Self {
            id,
            text,
            score,
            pattern,
            category: PhraseCategory::Phrase,
            hidden: false,
            connected: false,
            anchor_visible: true,
        }
    }

    /// Threshold and anchor focus both gate rendering; neither deletes anything.
    pub fn is_visible(&self) -> bool {
        !self.hidden && self.anchor_visible
    }
}

/// An edge between two cards in different, non-intake columns. `from_id` is the
/// term/anchor side when the edge comes out of the anchor flow, but equality is
/// undirected: {a,b} and {b,a} are the same edge.
#[derive(Debug, Clone, Copy, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from_id: CardId,
    pub to_id: CardId,
}

impl Connection {
    pub fn new(from_id: CardId, to_id: CardId) -> Self {
        Self { from_id, to_id }
    }

    pub fn touches(&self, id: CardId) -> bool {
        self.from_id == id || self.to_id == id
    }

    pub fn other(&self, id: CardId) -> Option<CardId> {
        if self.from_id == id {
            Some(self.to_id)
        } else if self.to_id == id {
            Some(self.from_id)
        } else {
            None
        }
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        (self.from_id == other.from_id && self.to_id == other.to_id)
            || (self.from_id == other.to_id && self.to_id == other.from_id)
    }
}

/// Scored item handed over by the upstream analysis stage. `type` carries the
/// pattern classification, kept as opaque display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredItem {
    pub id: CardId,
    pub text: String,
    pub tfidf: f32,
    #[serde(rename = "type", default)]
    pub pattern: Option<String>,
}

/// Per-card transfer record. Field names match the store's DTO.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotCard {
    pub id: CardId,
    pub text: String,
    pub tfidf: f32,
    #[serde(rename = "type", default)]
    pub pattern: Option<String>,
    pub phrase_type: PhraseCategory,
    #[serde(default)]
    pub hidden: bool,
}

/// The full serializable state of one dictionary. `id` absent means the dictionary
/// has never been persisted (save creates, otherwise updates).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionarySnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: String,
    pub phrases: Vec<SnapshotCard>,
    pub connections: Vec<Connection>,
    pub tfidf_range: f32,
    #[serde(default)]
    pub document_text: String,
}

/// Listing entry returned by the store, used to populate the merge target picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionarySummary {
    pub id: u32,
    pub name: String,
    pub created_at: f64,
    #[serde(default)]
    pub terms_count: usize,
    #[serde(default)]
    pub connections_count: usize,
}

impl DictionarySummary {
    pub fn created_at_label(&self) -> String {
        chrono::DateTime::from_timestamp(self.created_at as i64, 0)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
