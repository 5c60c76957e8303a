use reqwest::header::{HeaderMap, HeaderValue, InvalidHeaderValue, CONNECTION, COOKIE};

use super::cookies::{SessionCookie, XsrfToken};

/// The headers a caller must attach to every subsequent request against a
/// resolved server.
///
/// A server running without a password resolves to an empty header set. An
/// authenticated session carries `Connection: keep-alive` and a `Cookie`
/// header combining the anti-forgery token with the session cookie.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectionInfo {
    /// Headers to send with every request to the server.
    pub request_headers: HeaderMap,
}

impl ConnectionInfo {
    /// Connection info for a server that requires no authentication.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// Connection info carrying the cookies of an authenticated session.
    pub(crate) fn authenticated(
        xsrf: &XsrfToken,
        session: &SessionCookie,
    ) -> Result<Self, InvalidHeaderValue> {
        let mut request_headers = HeaderMap::new();
        request_headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));

        let cookie = format!("{}; {}", xsrf.to_cookie_header(), session.to_cookie_header());
        request_headers.insert(COOKIE, HeaderValue::from_str(&cookie)?);

        Ok(Self { request_headers })
    }

    /// Whether the server asked for no credentials at all.
    pub fn is_unauthenticated(&self) -> bool {
        self.request_headers.is_empty()
    }

    /// The `Cookie` header value, when a session was established.
    pub fn cookie(&self) -> Option<&str> {
        self.request_headers
            .get(COOKIE)
            .and_then(|value| value.to_str().ok())
    }
}
