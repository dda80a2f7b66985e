//! Sync Errors

use thiserror::Error;

/// Common result type for API and cache operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Everything that can go wrong talking to the task API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// The request never produced a response (network down, CORS, DNS)
    #[error("FETCH error: {0}")]
    Transport(String),

    /// The server answered with a non-success status
    #[error("status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON
    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl SyncError {
    /// The server saw the request and refused it.
    ///
    /// For every other variant the remote outcome is unknown.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SyncError::Status { .. })
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SyncError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            SyncError::Status {
                status: status.as_u16(),
                body: e.to_string(),
            }
        } else {
            SyncError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(e: serde_json::Error) -> Self {
        SyncError::Decode(e.to_string())
    }
}
