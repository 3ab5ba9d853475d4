//! Error types for endpoint calls.

use thiserror::Error;

/// Everything that can go wrong talking to one of the remote endpoints.
///
/// The UI treats every variant the same way (a placeholder where the data
/// would have been); the split only matters for logs and messages.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response (network, DNS, CORS).
    #[error("network error: {0}")]
    Transport(String),

    /// Endpoint answered with a non-2xx status.
    #[error("API failed with {0}")]
    Status(u16),

    /// Body was not JSON or lacked a required field.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
