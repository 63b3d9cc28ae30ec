//! Error types for the FIT2CLOUD SDK

use std::num::ParseIntError;

use thiserror::Error;

/// Result type using SdkError
pub type Result<T> = std::result::Result<T, SdkError>;

/// Main error type for the FIT2CLOUD SDK
#[derive(Error, Debug)]
pub enum SdkError {
    /// The API answered with a status other than 200. The message is the raw
    /// response body.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid numeric response {body:?}: {source}")]
    InvalidNumber {
        body: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Signing error: {0}")]
    Signing(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// True for a non-200 answer from the API
    pub fn is_api(&self) -> bool {
        matches!(self, SdkError::Api { .. })
    }

    /// True when the request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(self, SdkError::Http(_))
    }

    /// True when a 200 response body did not match the expected shape
    pub fn is_deserialization(&self) -> bool {
        matches!(self, SdkError::Json(_) | SdkError::InvalidNumber { .. })
    }

    /// Raw response body carried by an API error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            SdkError::Api { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Api { status, .. } => Some(*status),
            SdkError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
