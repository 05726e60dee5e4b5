//! Replaying the stored token against the current page

use crate::browser::{DocumentBody, PageLocation};
use crate::error::FrontendError;
use pageauth_core::{StorageBackend, TokenStorage};
use pageauth_http::{AuthClient, PageResponse};

/// Rendered in place of the page when it could not be fetched
pub const FALLBACK_HTML: &str =
    "<main><h1>Page unavailable</h1><p>The page could not be loaded. Try reloading.</p></main>";

#[derive(Debug)]
pub enum ReplayOutcome {
    /// The response body now is the document body
    Rendered { status: u16 },
    /// The fetch failed and the fallback document was rendered
    Failed(FrontendError),
}

/// Re-requests the current page with the bearer token and renders the result
pub struct TokenReplayHandler<B, L, D> {
    client: AuthClient,
    storage: TokenStorage<B>,
    location: L,
    body: D,
}

impl<B, L, D> TokenReplayHandler<B, L, D>
where
    B: StorageBackend,
    L: PageLocation,
    D: DocumentBody,
{
    pub const fn new(client: AuthClient, storage: TokenStorage<B>, location: L, body: D) -> Self {
        Self {
            client,
            storage,
            location,
            body,
        }
    }

    pub async fn replay(&self) -> ReplayOutcome {
        match self.fetch().await {
            Ok(page) => {
                tracing::debug!(status = page.status, "Rendering authenticated page");
                self.body.replace_inner_html(&page.body);
                ReplayOutcome::Rendered {
                    status: page.status,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Authenticated page load failed");
                self.body.replace_inner_html(FALLBACK_HTML);
                ReplayOutcome::Failed(e)
            }
        }
    }

    async fn fetch(&self) -> Result<PageResponse, FrontendError> {
        let token = self.storage.get();
        if token.is_none() {
            tracing::debug!(key = self.storage.key(), "No stored token, replaying without one");
        }
        let href = self.location.href()?;
        Ok(self.client.fetch_page(&href, token.as_deref()).await?)
    }
}
