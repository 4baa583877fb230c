use crate::core::DictionarySummary;

#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Created { dictionary_id: u32, message: String },
    Updated { message: String },
}

/// Results of background store requests, drained by the app once per frame.
/// Editing never waits on these; a failed request changes nothing locally.
#[derive(Debug, Clone)]
pub enum TaskResult {
    DictionarySaved(Result<SaveOutcome, String>),
    DictionaryMerged { target_id: u32, result: Result<String, String> },
    DictionariesListed(Result<Vec<DictionarySummary>, String>),
    DictionaryDeleted { id: u32, result: Result<String, String> },
    StatusMessage(String),
}
