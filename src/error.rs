// src/error.rs

//! Unified error handling for the intake client.

use thiserror::Error;

/// Result type alias for intake operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Submission to the coordination backend failed
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Failure of a single submission or backend read.
///
/// Every variant ends up as one display string on the form that issued the
/// request; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Required fields were empty; no request was made.
    #[error("{0}")]
    Validation(String),

    /// The request never completed (DNS, refused connection, timeout).
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("API {status}: {message}")]
    Server { status: u16, message: String },

    /// The payload or acknowledgement body could not be (de)serialized.
    #[error("Invalid payload: {0}")]
    Payload(String),
}

impl SubmissionError {
    /// HTTP status code, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message shown to the person filling in the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Transport(_) => "Failed to send request. Please try again.".to_string(),
            Self::Server { .. } | Self::Payload(_) => format!("Failed to send request: {self}"),
        }
    }
}
