use std::fmt::Display;
use thiserror::Error;

/// Failures talking to the backing key-value store. These never escape the
/// persistence gateway: it logs them and degrades to "nothing saved".
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backing store unavailable: {0}")]
    Unavailable(String),
    #[error("reading `{key}` failed: {reason}")]
    Read { key: String, reason: String },
    #[error("writing `{key}` failed: {reason}")]
    Write { key: String, reason: String },
    #[error("saved layouts are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl StoreError {
    pub fn write(key: &str, reason: impl Display) -> Self {
        StoreError::Write {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
