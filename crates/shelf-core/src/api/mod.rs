//! HTTP client for the merchandising API.
//!
//! Each operation maps to exactly one HTTP call against the configured
//! base URL. Responses are parsed typed bodies; non-2xx statuses become
//! [`ApiError`] values carrying the status code and server message.
//! The client performs no retries and no caching.

use std::fmt;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

pub mod auth;
pub mod products;
pub mod types;

/// Standard User-Agent header for shelf API requests.
pub const USER_AGENT: &str = concat!("shelf/", env!("CARGO_PKG_VERSION"));

/// Categories of API errors for consistent handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Invalid credentials or rejected/expired token (HTTP 401/403)
    Auth,
    /// Transport failure (connect, timeout)
    Network,
    /// Any other non-2xx status with a message body
    Server,
    /// Failed to parse a response body
    Parse,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiErrorKind::Auth => write!(f, "auth"),
            ApiErrorKind::Network => write!(f, "network"),
            ApiErrorKind::Server => write!(f, "server"),
            ApiErrorKind::Parse => write!(f, "parse"),
        }
    }
}

/// Structured error from the API with kind and details.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// Error category
    pub kind: ApiErrorKind,
    /// One-line summary suitable for display
    pub message: String,
    /// HTTP status code, when the server answered
    pub status: Option<u16>,
}

impl ApiError {
    /// Creates an error from a non-success HTTP status and response body.
    ///
    /// 401/403 classify as `Auth`; everything else as `Server`. The
    /// message is extracted from common error-body shapes when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = if status == 401 || status == 403 {
            ApiErrorKind::Auth
        } else {
            ApiErrorKind::Server
        };
        let message = match server_message(body) {
            Some(msg) => format!("HTTP {status}: {msg}"),
            None => format!("HTTP {status}"),
        };
        Self {
            kind,
            message,
            status: Some(status),
        }
    }

    /// Creates an error from a transport-level reqwest failure.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        };
        Self {
            kind: ApiErrorKind::Network,
            message,
            status: None,
        }
    }

    /// Creates a response-parsing error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: message.into(),
            status: None,
        }
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth(&self) -> bool {
        self.kind == ApiErrorKind::Auth
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Extracts a human-readable message from a server error body.
///
/// Probes the shapes the backend emits: `{"detail": "..."}`,
/// `{"error": "..."}`, `{"non_field_errors": ["..."]}`, and per-field
/// validation maps like `{"email": ["..."]}`.
fn server_message(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    let json: Value = serde_json::from_str(body).ok()?;
    let obj = json.as_object()?;

    for key in ["detail", "error", "message"] {
        if let Some(msg) = obj.get(key).and_then(Value::as_str) {
            return Some(msg.to_string());
        }
    }

    // Field-error map: join "field: first message" lines
    let mut parts = Vec::new();
    for (field, value) in obj {
        if let Some(first) = value.as_array().and_then(|a| a.first()).and_then(Value::as_str) {
            parts.push(format!("{field}: {first}"));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

/// Client for the merchandising API.
///
/// Cheap to clone; the underlying connection pool and token slot are
/// shared across clones.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Creates a client for the given base URL.
    ///
    /// The URL must be well-formed; a trailing slash is tolerated.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        url::Url::parse(trimmed).with_context(|| format!("Invalid API base URL: {base_url}"))?;

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Creates a client from loaded configuration.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Self::new(&config.base_url, config.request_timeout())
    }

    /// Installs the session token sent on subsequent requests.
    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    /// Removes the session token.
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Returns true if a session token is installed.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method, url).header("accept", "application/json");
        if let Some(token) = self.token.read().expect("token lock poisoned").as_deref() {
            builder = builder.header("authorization", format!("Token {token}"));
        }
        builder
    }

    async fn execute(&self, builder: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "api request failed");
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(response)
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to parse response body: {e}")))
    }

    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let mut builder = self.request(reqwest::Method::GET, path);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = self.execute(builder).await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(reqwest::Method::POST, path).json(body);
        let response = self.execute(builder).await?;
        Self::decode(response).await
    }

    /// POST where only the status matters (e.g. change-password).
    pub(crate) async fn post_status<B: Serialize>(&self, path: &str, body: &B) -> ApiResult<()> {
        let builder = self.request(reqwest::Method::POST, path).json(body);
        self.execute(builder).await?;
        Ok(())
    }

    pub(crate) async fn put_json<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let builder = self.request(reqwest::Method::PUT, path).json(body);
        let response = self.execute(builder).await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let builder = self.request(reqwest::Method::DELETE, path);
        self.execute(builder).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Error classification: 401 is Auth, 500 is Server.
    #[test]
    fn test_from_status_classification() {
        let auth = ApiError::from_status(401, r#"{"detail": "Invalid credentials."}"#);
        assert_eq!(auth.kind, ApiErrorKind::Auth);
        assert_eq!(auth.message, "HTTP 401: Invalid credentials.");
        assert_eq!(auth.status, Some(401));

        let server = ApiError::from_status(500, "");
        assert_eq!(server.kind, ApiErrorKind::Server);
        assert_eq!(server.message, "HTTP 500");
    }

    /// Server message extraction handles field-error maps.
    #[test]
    fn test_server_message_field_errors() {
        let body = r#"{"email": ["user with this email already exists."]}"#;
        assert_eq!(
            server_message(body).unwrap(),
            "email: user with this email already exists."
        );
    }

    /// Server message extraction ignores non-JSON bodies.
    #[test]
    fn test_server_message_non_json() {
        assert_eq!(server_message("<html>502</html>"), None);
        assert_eq!(server_message(""), None);
    }

    /// Base URL validation: malformed URLs are rejected, trailing slash trimmed.
    #[test]
    fn test_base_url_validation() {
        assert!(ApiClient::new("not a url", None).is_err());

        let client = ApiClient::new("http://localhost:8000/api/", None).unwrap();
        assert_eq!(client.base_url, "http://localhost:8000/api");
    }

    /// Token slot: shared across clones.
    #[test]
    fn test_token_shared_across_clones() {
        let client = ApiClient::new("http://localhost:8000/api", None).unwrap();
        let clone = client.clone();
        client.set_token("abc123");
        assert!(clone.has_token());
        clone.clear_token();
        assert!(!client.has_token());
    }
}
