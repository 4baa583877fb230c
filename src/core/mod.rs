pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::TermlinkError;
pub use models::{
    Card,
    CardId,
    Connection,
    DictionarySnapshot,
    DictionarySummary,
    PhraseCategory,
    ScoredItem,
    SnapshotCard,
};
