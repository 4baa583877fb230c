use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::types::{
    SaveOutcome,
    TaskResult,
};
use crate::{
    api,
    core::DictionarySnapshot,
};

/// Dispatches store requests on background threads and funnels their results back
/// through a channel. The UI thread keeps mutating the editor while requests are in
/// flight; there is no cancellation, a later save simply wins at the store.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Create or update depending on `snapshot.id`.
    pub fn save_dictionary(&self, base_url: String, snapshot: DictionarySnapshot) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::StatusMessage("Saving dictionary...".to_string()));

            let result: Result<SaveOutcome, String> = runtime.block_on(async {
                match snapshot.id {
                    Some(id) => {
                        let response = api::update_dictionary(&base_url, id, &snapshot)
                            .await
                            .map_err(|e| e.to_string())?;
                        if response.success {
                            Ok(SaveOutcome::Updated {
                                message: response
                                    .message
                                    .unwrap_or_else(|| "Dictionary updated".to_string()),
                            })
                        } else {
                            Err(response.message.unwrap_or_else(|| "Update failed".to_string()))
                        }
                    }
                    None => {
                        let response = api::create_dictionary(&base_url, &snapshot)
                            .await
                            .map_err(|e| e.to_string())?;
                        match (response.success, response.dictionary_id) {
                            (true, Some(dictionary_id)) => Ok(SaveOutcome::Created {
                                dictionary_id,
                                message: response
                                    .message
                                    .unwrap_or_else(|| "Dictionary saved".to_string()),
                            }),
                            (true, None) => {
                                Err("Store did not return a dictionary id".to_string())
                            }
                            (false, _) => {
                                Err(response.message.unwrap_or_else(|| "Save failed".to_string()))
                            }
                        }
                    }
                }
            });

            let _ = sender.send(TaskResult::DictionarySaved(result));
        });
    }

    pub fn merge_dictionary(
        &self,
        base_url: String,
        target_id: u32,
        snapshot: DictionarySnapshot,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::StatusMessage("Merging dictionary...".to_string()));

            let result: Result<String, String> = runtime.block_on(async {
                let response = api::merge_into(&base_url, target_id, &snapshot)
                    .await
                    .map_err(|e| e.to_string())?;
                if response.success {
                    Ok(response.message.unwrap_or_else(|| "Dictionary merged".to_string()))
                } else {
                    Err(response.message.unwrap_or_else(|| "Merge failed".to_string()))
                }
            });

            let _ = sender.send(TaskResult::DictionaryMerged { target_id, result });
        });
    }

    pub fn list_dictionaries(&self, base_url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let response =
                    api::list_dictionaries(&base_url).await.map_err(|e| e.to_string())?;
                if response.success {
                    Ok(response.data)
                } else {
                    Err(response.message.unwrap_or_else(|| "Listing failed".to_string()))
                }
            });

            let _ = sender.send(TaskResult::DictionariesListed(result));
        });
    }

    pub fn delete_dictionary(&self, base_url: String, id: u32) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result: Result<String, String> = runtime.block_on(async {
                let response =
                    api::delete_dictionary(&base_url, id).await.map_err(|e| e.to_string())?;
                if response.success {
                    Ok(response.message.unwrap_or_else(|| "Dictionary deleted".to_string()))
                } else {
                    Err(response.message.unwrap_or_else(|| "Delete failed".to_string()))
                }
            });

            let _ = sender.send(TaskResult::DictionaryDeleted { id, result });
        });
    }
}
