//! Login endpoint

use super::{AuthClient, ClientError};
use crate::types::{LoginForm, LoginReply, LoginResponse};
use serde_json::Value as JsonValue;
use reqwest::Method;
use reqwest::multipart::Form;

impl AuthClient {
    /// Post the login form as multipart data and decode the JSON reply.
    ///
    /// The body is decoded whatever the status code; rejected credentials and
    /// JSON without a usable `access_token` come back as a reply without a
    /// token, not as an error. Only a body that is not JSON at all fails.
    pub async fn login(&self, form: &LoginForm) -> Result<LoginReply, ClientError> {
        let multipart = form
            .fields()
            .fold(Form::new(), |acc, (name, value)| {
                acc.text(name.to_string(), value.to_string())
            });

        let response = self
            .client
            .request(Method::POST, self.url_for(&self.login_path))
            .multipart(multipart)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = LoginResponse::from(response.json::<JsonValue>().await?);
        tracing::debug!(status, has_token = body.access_token.is_some(), "Login response decoded");

        Ok(LoginReply { status, body })
    }
}
