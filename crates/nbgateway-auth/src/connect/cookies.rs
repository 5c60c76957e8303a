//! Extraction of the cookies the login handshake cares about from raw
//! `set-cookie` response headers.

use reqwest::header::{HeaderMap, SET_COOKIE};

/// Name of the anti-forgery cookie issued alongside the login page.
const XSRF_COOKIE: &str = "_xsrf";

/// Anti-forgery token required to submit the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XsrfToken(pub(crate) String);

impl XsrfToken {
    /// The raw token value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the token as `_xsrf=value` for HTTP Cookie header injection.
    pub fn to_cookie_header(&self) -> String {
        format!("{XSRF_COOKIE}={}", self.0)
    }
}

/// A session cookie issued by the server after successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
}

impl SessionCookie {
    /// Formats the cookie as `name=value` for HTTP Cookie header injection.
    pub fn to_cookie_header(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

/// Parses the cookie pair out of every `set-cookie` header on a response.
///
/// Each `set-cookie` entry defines one cookie: the `name=value` pair before
/// the first `;`. Attribute segments (`Path`, `expires`, ...) are dropped.
/// Entries without a `=` are skipped.
pub(crate) fn response_cookies(headers: &HeaderMap) -> Vec<SessionCookie> {
    let mut cookies = Vec::new();

    for entry in headers.get_all(SET_COOKIE) {
        let Ok(raw) = entry.to_str() else {
            tracing::warn!("Ignoring a set-cookie header that is not valid UTF-8");
            continue;
        };

        let pair = match raw.split_once(';') {
            Some((pair, _attributes)) => pair,
            None => raw,
        };

        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };

        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        cookies.push(SessionCookie {
            name: name.to_string(),
            value: value.trim().to_string(),
        });
    }

    cookies
}

/// The anti-forgery token, if the response set one.
pub(crate) fn extract_xsrf_token(headers: &HeaderMap) -> Option<XsrfToken> {
    response_cookies(headers)
        .into_iter()
        .find(|cookie| cookie.name == XSRF_COOKIE)
        .map(|cookie| XsrfToken(cookie.value))
}

/// The first cookie that is not the anti-forgery token. On a successful
/// login response this is the session cookie.
pub(crate) fn extract_session_cookie(headers: &HeaderMap) -> Option<SessionCookie> {
    response_cookies(headers)
        .into_iter()
        .find(|cookie| cookie.name != XSRF_COOKIE)
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers_with_cookies(values: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(SET_COOKIE, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn test_bare_pair_is_parsed() {
        let headers = headers_with_cookies(&["sessionName=sessionValue"]);
        let cookies = response_cookies(&headers);

        assert_eq!(
            cookies,
            [SessionCookie {
                name: "sessionName".to_string(),
                value: "sessionValue".to_string(),
            }]
        );
    }

    #[test]
    fn test_attributes_are_dropped() {
        let headers =
            headers_with_cookies(&["_xsrf=12341234; Path=/; expires=Fri, 01 Jan 2030 00:00:00 GMT"]);
        let cookies = response_cookies(&headers);

        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "_xsrf");
        assert_eq!(cookies[0].value, "12341234");
    }

    #[test]
    fn test_value_may_contain_equals_signs() {
        let headers = headers_with_cookies(&["token=YWJjZGVmZw==; Path=/"]);
        let cookies = response_cookies(&headers);

        assert_eq!(cookies[0].value, "YWJjZGVmZw==");
    }

    #[test]
    fn test_entries_without_a_pair_are_skipped() {
        let headers = headers_with_cookies(&["garbage", "valid=1"]);
        let cookies = response_cookies(&headers);

        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies[0].name, "valid");
    }

    #[test]
    fn test_extract_xsrf_token() {
        let headers = headers_with_cookies(&["other=1", "_xsrf=token; Path=/"]);
        let token = extract_xsrf_token(&headers).unwrap();

        assert_eq!(token.as_str(), "token");
        assert_eq!(token.to_cookie_header(), "_xsrf=token");
    }

    #[test]
    fn test_extract_session_cookie_skips_xsrf() {
        let headers = headers_with_cookies(&["_xsrf=token; Path=/", "jupyter-session=abc; HttpOnly"]);
        let session = extract_session_cookie(&headers).unwrap();

        assert_eq!(session.name, "jupyter-session");
        assert_eq!(session.value, "abc");
        assert_eq!(session.to_cookie_header(), "jupyter-session=abc");
    }

    #[test]
    fn test_no_cookies_yields_nothing() {
        let headers = HeaderMap::new();
        assert_eq!(extract_xsrf_token(&headers), None);
        assert_eq!(extract_session_cookie(&headers), None);
    }
}
