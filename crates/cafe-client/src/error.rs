//! Error types for menu loading and order submission.

use std::path::PathBuf;

use thiserror::Error;

/// Order rejected before any network call.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("cart is empty")]
    EmptyCart,
    #[error("customer name is required")]
    MissingName,
    #[error("customer phone is required")]
    MissingPhone,
}

/// Failure talking to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("undecodable response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    #[error("order validation failed: {0}")]
    Validation(#[from] ValidationFailure),

    #[error("network error: {0}")]
    Network(#[from] TransportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// Short message suitable for showing to the customer.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Validation(ValidationFailure::EmptyCart) => {
                "Your cart is empty. Add an item before placing the order."
            }
            Self::Validation(ValidationFailure::MissingName) => "Please enter your name.",
            Self::Validation(ValidationFailure::MissingPhone) => "Please enter a phone number.",
            Self::Network(TransportError::Status { .. }) => {
                "The order service rejected the request. Please try again."
            }
            Self::Network(_) => "Could not reach the order service. Please check your connection.",
            Self::Config(_) => "The configuration file could not be loaded.",
        }
    }

    /// Whether the same call may succeed if repeated unchanged.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(TransportError::Request(_)) => true,
            Self::Network(TransportError::Status { status, .. }) => *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
