use thiserror::Error;

/// Per-file load failure. Never escalates past the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StashError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON array of items, found {0}")]
    NotAnArray(&'static str),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StashError {
    fn from(err: std::io::Error) -> Self {
        StashError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StashError {
    fn from(err: serde_json::Error) -> Self {
        StashError::InvalidJson(err.to_string())
    }
}
