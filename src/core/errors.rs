use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermlinkError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("TermlinkError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for TermlinkError {
    fn from(error: std::io::Error) -> Self {
        TermlinkError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for TermlinkError {
    fn from(error: reqwest::Error) -> Self {
        TermlinkError::Reqwest(Box::new(error))
    }
}
