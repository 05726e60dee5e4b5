//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure, or a body that could not be decoded
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The URL to fetch could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Whether the server answered but the body was not the expected JSON
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_decode())
    }
}
