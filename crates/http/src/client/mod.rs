//! Pageauth HTTP client

pub mod auth;
pub mod error;
pub mod page;

use error::ClientError;
use pageauth_core::AuthConfig;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_USER_AGENT: &str = concat!("pageauth-client/", env!("CARGO_PKG_VERSION"));

/// Client for the authentication endpoint and authenticated page loads
#[derive(Clone, Debug)]
pub struct AuthClient {
    client: Client,
    base_url: String,
    login_path: String,
}

impl AuthClient {
    /// Create a new client with default configuration
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> AuthClientBuilder {
        AuthClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the login endpoint path
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Builder for AuthClient
#[derive(Default)]
pub struct AuthClientBuilder {
    base_url: Option<String>,
    login_path: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl AuthClientBuilder {
    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the login endpoint path
    #[must_use]
    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    /// Set the request timeout
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<AuthClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        url::Url::parse(&base_url)?;

        let login_path = self
            .login_path
            .unwrap_or_else(|| AuthConfig::LOGIN_PATH.to_string());
        if !login_path.starts_with('/') {
            return Err(ClientError::Configuration(format!(
                "login_path must start with '/', got {login_path:?}"
            )));
        }

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(user_agent) = self.user_agent {
            client_builder = client_builder.user_agent(user_agent);
        } else {
            client_builder = client_builder.user_agent(DEFAULT_USER_AGENT);
        }

        let client = client_builder.build()?;

        Ok(AuthClient {
            client,
            base_url,
            login_path,
        })
    }
}
