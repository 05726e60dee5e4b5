//! Frontend error types

use pageauth_core::CoreError;
use pageauth_http::ClientError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrontendError {
    /// A DOM node the handlers depend on is not on the page
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A browser API threw
    #[error("JavaScript error: {0}")]
    Js(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),
}

impl FrontendError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingElement(what.into())
    }
}
