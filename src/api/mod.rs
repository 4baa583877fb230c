//! Client for the external dictionary store. Routes and response shapes follow the
//! store's REST surface; every response is JSON with a `success` flag and an
//! optional human-readable `message` that is surfaced to the user verbatim.

use reqwest::Client;
use serde::Deserialize;

use crate::core::{
    DictionarySnapshot,
    DictionarySummary,
    TermlinkError,
};

#[derive(Debug, Deserialize)]
pub struct StoreResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub dictionary_id: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Vec<DictionarySummary>,
}

pub async fn create_dictionary(
    base_url: &str,
    snapshot: &DictionarySnapshot,
) -> Result<StoreResponse, TermlinkError> {
    let response = Client::new()
        .post(format!("{}/api/dictionary", base_url))
        .json(snapshot)
        .send()
        .await?
        .json()
        .await?;
    Ok(response)
}

pub async fn update_dictionary(
    base_url: &str,
    id: u32,
    snapshot: &DictionarySnapshot,
) -> Result<StoreResponse, TermlinkError> {
    let response = Client::new()
        .patch(format!("{}/api/dictionary/{}", base_url, id))
        .json(snapshot)
        .send()
        .await?
        .json()
        .await?;
    Ok(response)
}

/// The local snapshot's own id is irrelevant here; the target decides where the
/// cards land. Conflict resolution is the store's problem, we only guarantee the
/// snapshot is structurally valid.
pub async fn merge_into(
    base_url: &str,
    target_id: u32,
    snapshot: &DictionarySnapshot,
) -> Result<StoreResponse, TermlinkError> {
    let response = Client::new()
        .post(format!("{}/api/dictionary/{}/merge", base_url, target_id))
        .json(snapshot)
        .send()
        .await?
        .json()
        .await?;
    Ok(response)
}

pub async fn list_dictionaries(base_url: &str) -> Result<ListResponse, TermlinkError> {
    let response =
        Client::new().get(format!("{}/api/dictionaries", base_url)).send().await?.json().await?;
    Ok(response)
}

pub async fn delete_dictionary(base_url: &str, id: u32) -> Result<StoreResponse, TermlinkError> {
    let response = Client::new()
        .delete(format!("{}/api/dictionary/{}", base_url, id))
        .send()
        .await?
        .json()
        .await?;
    Ok(response)
}
