//! Types exchanged with the authentication server

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Text fields collected from a login form at submit time.
///
/// Field order is preserved so the multipart body matches the form layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    fields: Vec<(String, String)>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The OAuth2 password form the login endpoint expects
    pub fn credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new()
            .field("username", username)
            .field("password", password)
    }

    /// Append a field, builder style
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First value submitted under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields()
            .find_map(|(k, v)| (k == name).then_some(v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Decoded body of the login endpoint.
///
/// Successful logins carry the token pair, failed ones a `detail` message.
/// Any JSON document converts, so callers inspect the fields instead of the
/// status. Scalar tokens (numbers, booleans) are kept as their JSON text;
/// `null`, objects and arrays count as no token.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginResponse {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<JsonValue>,
}

fn token_text(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

impl From<JsonValue> for LoginResponse {
    fn from(value: JsonValue) -> Self {
        let JsonValue::Object(mut fields) = value else {
            return Self::default();
        };
        Self {
            access_token: token_text(fields.get("access_token")),
            refresh_token: token_text(fields.get("refresh_token")),
            token_type: token_text(fields.get("token_type")),
            detail: fields.remove("detail").filter(|d| !d.is_null()),
        }
    }
}

/// Login response together with the HTTP status it arrived with
#[derive(Debug, Clone, PartialEq)]
pub struct LoginReply {
    pub status: u16,
    pub body: LoginResponse,
}

impl LoginReply {
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// A page fetched with the bearer header, whatever its status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    pub status: u16,
    pub body: String,
}
