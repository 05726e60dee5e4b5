//! Authenticated page loads

use super::{AuthClient, ClientError};
use crate::types::PageResponse;
use pageauth_core::bearer_header_value;
use reqwest::{Method, header};

impl AuthClient {
    /// Fetch an absolute URL (`href`) with the bearer token attached.
    ///
    /// Every status code yields a [`PageResponse`]; only transport failures
    /// and unreadable bodies are errors.
    pub async fn fetch_page(
        &self,
        href: &str,
        token: Option<&str>,
    ) -> Result<PageResponse, ClientError> {
        let url = url::Url::parse(href)?;

        let response = self
            .client
            .request(Method::GET, url)
            .header(header::AUTHORIZATION, bearer_header_value(token))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        tracing::debug!(status, bytes = body.len(), "Page fetched");

        Ok(PageResponse { status, body })
    }
}
