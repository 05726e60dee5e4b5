//! Login form submission

use crate::browser::{FormSubmission, Navigator};
use pageauth_core::{AuthConfig, StorageBackend, TokenStorage};
use pageauth_http::{AuthClient, ClientError, LoginForm};

/// What became of a login attempt
#[derive(Debug)]
pub enum LoginOutcome {
    /// The server answered with JSON and the browser was sent home
    Navigated { token_stored: bool },
    /// The request or its decoding failed; nothing was changed
    Abandoned(ClientError),
}

/// Posts the login form and hands the returned token to later page loads
pub struct LoginSubmitHandler<B, N> {
    client: AuthClient,
    storage: TokenStorage<B>,
    navigator: N,
    home_path: String,
}

impl<B: StorageBackend, N: Navigator> LoginSubmitHandler<B, N> {
    pub fn new(client: AuthClient, storage: TokenStorage<B>, navigator: N) -> Self {
        Self {
            client,
            storage,
            navigator,
            home_path: AuthConfig::HOME_PATH.to_string(),
        }
    }

    #[must_use]
    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }

    pub const fn storage(&self) -> &TokenStorage<B> {
        &self.storage
    }

    /// Synchronous part of a submit: cancel the default action, then read the form.
    ///
    /// Must run inside the event dispatch, before any await point.
    pub fn intercept<S: FormSubmission + ?Sized>(&self, submission: &S) -> Option<LoginForm> {
        submission.prevent_default();

        match submission.form_fields() {
            Ok(form) => Some(form),
            Err(e) => {
                tracing::error!(error = %e, "Failed to read login form");
                None
            }
        }
    }

    /// Send the form and act on the reply
    pub async fn complete(&self, form: LoginForm) -> LoginOutcome {
        let reply = match self.client.login(&form).await {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_decode() {
                    tracing::error!(error = %e, "Login response was not valid JSON");
                } else {
                    tracing::error!(error = %e, "Login request failed");
                }
                return LoginOutcome::Abandoned(e);
            }
        };

        let token_stored = match reply.body.access_token.as_deref() {
            Some(token) => match self.storage.set(token) {
                Ok(()) => true,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to persist access token");
                    false
                }
            },
            None => {
                match &reply.body.detail {
                    Some(detail) => tracing::warn!(
                        status = reply.status,
                        detail = %detail,
                        "Login response carried no access token"
                    ),
                    None => tracing::warn!(
                        status = reply.status,
                        "Login response carried no access token"
                    ),
                }
                if let Err(e) = self.storage.clear() {
                    tracing::error!(error = %e, "Failed to clear stale access token");
                }
                false
            }
        };

        // TODO: gate this on `token_stored` once the login page can show an error message
        if let Err(e) = self.navigator.navigate(&self.home_path) {
            tracing::error!(error = %e, path = %self.home_path, "Navigation failed");
        }

        LoginOutcome::Navigated { token_stored }
    }

    /// Intercept and complete in one go. `None` if the form could not be read.
    pub async fn handle<S: FormSubmission + ?Sized>(&self, submission: &S) -> Option<LoginOutcome> {
        let form = self.intercept(submission)?;
        Some(self.complete(form).await)
    }
}
