//! Error types for the AquaTracker data layer.

use thiserror::Error;

/// Result type alias using the AquaTracker Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for AquaTracker data-layer operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Network/transport failure before an HTTP status was received
    #[error("Request error: {0}")]
    Request(String),

    /// Non-2xx HTTP response, carrying status and server-provided message
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client-side validation rejected the input before a request was issued
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status of an API failure, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}
