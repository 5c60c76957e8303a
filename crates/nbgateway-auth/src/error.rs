//! Errors produced while negotiating access to a notebook gateway.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from building or driving the HTTP transport.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The underlying HTTP client failed.
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// The server could not be reached at the transport level.
    #[error("Connection to the server failed: {0}")]
    Connection(String),
}

/// Errors from submitting credentials to the login endpoint.
///
/// These never escape [`PasswordConnectClient`](crate::PasswordConnectClient),
/// which reports failures by returning no connection info, but they carry the
/// detail that ends up in the logs.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The transport failed before the server produced a response.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A cookie value contained bytes that cannot be sent in a request header.
    #[error("Cookie cannot be carried in a request header: {0}")]
    InvalidCookieValue(#[from] reqwest::header::InvalidHeaderValue),

    /// The server answered with something other than the success redirect.
    ///
    /// Notebook servers re-render the login page with a `200` when the
    /// password is wrong, so any non-redirect status lands here.
    #[error("Login was rejected by the server (status {status})")]
    Rejected {
        /// Status code of the rejection response.
        status: StatusCode,
    },

    /// The success redirect did not carry a session cookie.
    #[error("Login succeeded but no session cookie was issued")]
    MissingSessionCookie,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_error_includes_status() {
        let error = LoginError::Rejected {
            status: StatusCode::OK,
        };
        assert_eq!(
            error.to_string(),
            "Login was rejected by the server (status 200 OK)"
        );
    }

    #[test]
    fn test_fetch_error_is_transparent() {
        let error = LoginError::Fetch(FetchError::Connection("no route to host".to_string()));
        assert_eq!(error.to_string(), "Connection to the server failed: no route to host");
    }
}
