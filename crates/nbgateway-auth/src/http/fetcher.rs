use reqwest::{
    header::{HeaderMap, HeaderValue, SET_COOKIE},
    Method, StatusCode,
};

use crate::error::FetchError;

/// A single HTTP request issued by the authentication flow.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL, sent as given.
    pub url: String,
    /// Headers to send with the request.
    pub headers: HeaderMap,
    /// Request body, present only for login form submissions.
    pub body: Option<String>,
}

impl FetchRequest {
    /// A GET request with no body.
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers,
            body: None,
        }
    }

    /// A POST request carrying `body`.
    pub fn post(url: impl Into<String>, headers: HeaderMap, body: String) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            body: Some(body),
        }
    }
}

/// The response surface the authentication flow consumes.
///
/// Only the transport-level success flag, the raw status code and the
/// response headers matter to the handshake; response bodies are never read.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// Whether the response counts as successful at the transport level.
    ///
    /// Usually mirrors `status.is_success()`. Probes trust this flag; login
    /// submissions are judged by the raw status code alone.
    pub ok: bool,
    /// Raw HTTP status code.
    pub status: StatusCode,
    /// Response headers, including any `set-cookie` entries.
    pub headers: HeaderMap,
}

impl FetchResponse {
    /// Builds a response whose `ok` flag mirrors `status.is_success()`.
    pub fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self {
            ok: status.is_success(),
            status,
            headers,
        }
    }

    /// All raw `set-cookie` values on the response, in arrival order.
    pub fn set_cookie_values(&self) -> impl Iterator<Item = &HeaderValue> {
        self.headers.get_all(SET_COOKIE).iter()
    }
}

/// HTTP transport capability.
///
/// Production code uses [`ReqwestFetcher`](crate::ReqwestFetcher); tests
/// inject scripted implementations to drive the handshake without a network.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Perform `request` and return its response surface.
    ///
    /// Implementations must not follow redirects: the login handshake needs
    /// to observe the raw redirect status and its `set-cookie` headers.
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, FetchError>;
}
