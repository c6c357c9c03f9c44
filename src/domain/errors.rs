//! Domain error types
//!
//! This module defines the error hierarchy for Quire. Errors are domain-specific
//! and don't expose third-party types such as `reqwest::Error`.

use thiserror::Error;

/// Main Quire error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum QuireError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Content provider errors (fatal to a run)
    #[error("Content provider error: {0}")]
    Provider(#[from] ProviderError),

    /// A record could not be mapped to an output path
    #[error("Path derivation error: {0}")]
    PathDerivation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Content provider errors
///
/// Any of these aborts the whole run: the fetch is a single opaque
/// operation with no partial-page semantics.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Failed to reach the provider
    #[error("Failed to connect to content provider: {0}")]
    ConnectionFailed(String),

    /// Credential rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    /// Timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

impl From<std::io::Error> for QuireError {
    fn from(err: std::io::Error) -> Self {
        QuireError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for QuireError {
    fn from(err: serde_json::Error) -> Self {
        QuireError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for QuireError {
    fn from(err: toml::de::Error) -> Self {
        QuireError::Configuration(format!("TOML parse error: {err}"))
    }
}
