// src/utils/error.rs
use std::io;
use thiserror::Error;

/// Main error type for the NOMP client
///
/// This enum represents all possible error conditions that can occur
/// while fetching and decoding pool status, including transport,
/// decoding, and configuration errors.
#[derive(Error, Debug)]
pub enum NompError {
    /// Network/HTTP failure, including non-success status codes
    #[error("Transport error: {0}")]
    TransportError(String),

    /// A numeric-or-string JSON field holds content that is not a valid
    /// number for its target type
    #[error("Malformed number in field '{field}': {value:?}")]
    MalformedNumber {
        /// JSON field name the bad value arrived in
        field: &'static str,
        /// The offending raw value
        value: String,
    },

    /// HTTP request/response errors from the underlying client
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    /// Standard I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// Configuration file or parameter errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
