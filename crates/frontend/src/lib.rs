//! Browser handlers for token based page authentication.
//!
//! A login page posts its form to the auth endpoint and keeps the returned
//! access token. Protected pages then re-request themselves with that token as
//! a bearer header and render whatever the server sends back.

pub mod browser;
pub mod error;
pub mod handlers;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use browser::{DocumentBody, FormSubmission, Navigator, PageLocation};
pub use error::FrontendError;
pub use handlers::{
    FALLBACK_HTML, LoginOutcome, LoginSubmitHandler, ReplayOutcome, TokenReplayHandler,
};

use pageauth_core::FrontendConfig;
use pageauth_http::{AuthClient, ClientError};

/// Build the HTTP client described by `config`, falling back to `origin`
/// when no base URL is configured.
pub fn client_for(config: &FrontendConfig, origin: &str) -> Result<AuthClient, ClientError> {
    let mut builder = AuthClient::builder()
        .base_url(config.base_url.as_deref().unwrap_or(origin))
        .login_path(config.login_path.clone());

    if let Some(secs) = config.request_timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }

    builder.build()
}
