use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::{ErrorResponse, Session};

/// Failures surfaced by the resource clients.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, CORS, connection refused...).
    #[error("unable to reach the server: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A success body did not match the expected shape.
    #[error("unexpected response from the server: {0}")]
    Decode(String),
    /// The call needs a bearer token and none is held.
    #[error("you need to be signed in to do that")]
    Unauthenticated,
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials or none were sent.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Unauthenticated | Self::Status { status: 401 | 403, .. }
        )
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// HTTP client for the marketplace API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    token: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

impl ApiClient {
    /// Create an anonymous client for the configured base URL.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            client: Client::new(),
            token: None,
        }
    }

    /// A copy of this client that authorizes with `token`.
    #[must_use]
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            token: token
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
            ..self.clone()
        }
    }

    /// A copy of this client carrying the session's token, if any.
    #[must_use]
    pub fn for_session(&self, session: Option<&Session>) -> Self {
        self.with_token(session.and_then(Session::token))
    }

    /// Base URL every path is joined onto.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bearer token attached to requests, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Join `path` onto the base URL.
    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Fail with [`ApiError::Unauthenticated`] before any request when no token is held.
    pub(crate) fn require_token(&self) -> Result<(), ApiError> {
        if self.token.is_some() {
            Ok(())
        } else {
            Err(ApiError::Unauthenticated)
        }
    }

    /// Start a request, attaching the bearer token when one is held.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.api_url(path);
        debug!(%method, %url, authorized = self.token.is_some(), "api request");
        let builder = self.client.request(method, url);
        match self.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send the request and turn any non-success status into [`ApiError::Status`].
    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = ErrorResponse::message_from_body(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .map_or_else(|| status.as_str().to_string(), str::to_string)
        });
        warn!(status = status.as_u16(), %message, "api request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode a success body as JSON.
    pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// `GET path` decoded as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        Self::read_json(response).await
    }

    /// Send `body` as JSON and decode the answer as `T`.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(self.request(method, path).json(body)).await?;
        Self::read_json(response).await
    }

    /// Send a request whose response body is irrelevant.
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(method, path)).await.map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_joins_with_single_slash() {
        let client = ApiClient::new(&ApiConfig::new("http://localhost:8080/api/"));
        assert_eq!(client.api_url("/store/public"), "http://localhost:8080/api/store/public");
        assert_eq!(client.api_url("tags/all"), "http://localhost:8080/api/tags/all");
    }

    #[test]
    fn with_token_ignores_blank_tokens() {
        let client = ApiClient::default();
        assert!(client.with_token(Some("  ")).token().is_none());
        assert_eq!(client.with_token(Some(" abc ")).token(), Some("abc"));
        assert!(client.with_token(Some("abc")).with_token(None).token().is_none());
    }

    #[test]
    fn for_session_uses_session_token() {
        let session = Session {
            token: Some("tok".to_string()),
            ..Default::default()
        };
        let client = ApiClient::default();
        assert_eq!(client.for_session(Some(&session)).token(), Some("tok"));
        assert!(client.for_session(None).token().is_none());
    }

    #[test]
    fn require_token_without_token_fails() {
        assert_eq!(
            ApiClient::default().require_token(),
            Err(ApiError::Unauthenticated)
        );
    }

    #[test]
    fn unauthorized_classification() {
        let forbidden = ApiError::Status {
            status: 403,
            message: "Acesso negado".to_string(),
        };
        assert!(forbidden.is_unauthorized());
        assert_eq!(forbidden.status(), Some(403));
        assert_eq!(forbidden.to_string(), "Acesso negado");
        assert!(!ApiError::Transport("down".to_string()).is_unauthorized());
        assert!(ApiError::Unauthenticated.is_unauthorized());
    }
}
