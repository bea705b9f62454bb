// Error type for the beta client. Every failure is normalized into one
// human-readable message; `Display` is what the UI prints.

use serde_json::Value;
use thiserror::Error;

use crate::config::ConfigError;

pub const CONNECTION_MESSAGE: &str =
    "Unable to connect to server. Please check your internet connection.";
pub const SERVER_FALLBACK_MESSAGE: &str = "Server error occurred";
pub const UNEXPECTED_FALLBACK_MESSAGE: &str = "An unexpected error occurred";

pub type Result<T> = std::result::Result<T, BetaError>;

#[derive(Debug, Error)]
pub enum BetaError {
    /// Input rejected before anything is sent.
    #[error("{0}")]
    Validation(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request left but no response came back (refused, timed out).
    #[error("Unable to connect to server. Please check your internet connection.")]
    Connection(#[source] reqwest::Error),

    #[error("{0}")]
    Unexpected(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BetaError {
    /// Build a `Server` error from a status code and raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        BetaError::Server {
            status,
            message: server_message(body),
        }
    }

    /// Wrap any other failure, falling back to a generic message when the
    /// underlying one is empty.
    pub fn unexpected(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            BetaError::Unexpected(UNEXPECTED_FALLBACK_MESSAGE.to_string())
        } else {
            BetaError::Unexpected(message)
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            BetaError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for BetaError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() || err.is_request() {
            BetaError::Connection(err)
        } else {
            BetaError::unexpected(err.to_string())
        }
    }
}

/// Pull the most useful message out of an error body: `detail` (string or a
/// FastAPI validation list), then `message`, then a generic fallback.
fn server_message(body: &str) -> String {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return SERVER_FALLBACK_MESSAGE.to_string();
    };

    match json.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => return detail.clone(),
        Some(Value::Array(items)) => {
            let msgs: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if !msgs.is_empty() {
                return msgs.join("; ");
            }
        }
        _ => {}
    }

    match json.get("message") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        _ => SERVER_FALLBACK_MESSAGE.to_string(),
    }
}
