//! Frontend configuration

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Endpoint that exchanges the login form for an access token
    pub const LOGIN_PATH: &'static str = "/api/auth/login";

    /// Persistent storage key holding the access token
    pub const TOKEN_KEY: &'static str = "token";

    /// Where the browser is sent after a login attempt
    pub const HOME_PATH: &'static str = "/";

    /// DOM id of the login form
    pub const LOGIN_FORM_ID: &'static str = "loginForm";

    /// Default log level for the console subscriber
    pub const LOG_LEVEL: &'static str = "info";
}

/// Runtime overrides for the frontend handlers.
///
/// Every field falls back to the matching [`AuthConfig`] constant, so a host page
/// only needs to pass the values it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Origin used for the login request. `None` means the current page origin.
    pub base_url: Option<String>,
    pub login_path: String,
    pub token_key: String,
    pub home_path: String,
    pub login_form_id: String,
    pub log_level: String,
    /// Request timeout in seconds, native targets only
    pub request_timeout_secs: Option<u64>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            login_path: AuthConfig::LOGIN_PATH.to_string(),
            token_key: AuthConfig::TOKEN_KEY.to_string(),
            home_path: AuthConfig::HOME_PATH.to_string(),
            login_form_id: AuthConfig::LOGIN_FORM_ID.to_string(),
            log_level: AuthConfig::LOG_LEVEL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl FrontendConfig {
    /// Parse a JSON override document and validate the result
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CoreError::invalid_config(format!("malformed config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the handlers rely on
    pub fn validate(&self) -> CoreResult<()> {
        if self.token_key.is_empty() {
            return Err(CoreError::invalid_config("token_key must not be empty"));
        }
        if self.login_form_id.is_empty() {
            return Err(CoreError::invalid_config("login_form_id must not be empty"));
        }
        for (name, path) in [
            ("login_path", &self.login_path),
            ("home_path", &self.home_path),
        ] {
            if !path.starts_with('/') {
                return Err(CoreError::invalid_config(format!(
                    "{name} must start with '/', got {path:?}"
                )));
            }
        }
        Ok(())
    }
}
