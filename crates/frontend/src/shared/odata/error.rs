use contracts::shared::query::QueryError;
use serde::Deserialize;
use thiserror::Error;

use super::transport::TransportError;

/// Failure of a request against the remote API.
///
/// The `Display` text is what notifications quote.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] TransportError),
    /// Non-success status; `message` comes from the error body when present
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Invalid response: {0}")]
    Parse(String),
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),
    #[error("Record has no {0}")]
    MissingIdentity(&'static str),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<NestedError>,
}

#[derive(Deserialize)]
struct NestedError {
    message: Option<String>,
}

impl FetchError {
    /// Build a status error from a response body carrying `message`
    /// (or OData's `error.message`)
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message.or_else(|| b.error.and_then(|e| e.message)))
            .unwrap_or_else(|| format!("HTTP {}", status));
        FetchError::Status { status, message }
    }
}
