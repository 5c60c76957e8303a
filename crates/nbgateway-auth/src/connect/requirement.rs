//! Probing a gateway root for its authentication requirements.

use reqwest::header::{HeaderMap, HeaderValue, CONNECTION};
use tracing::{debug, warn};

use super::{
    cookies::{self, XsrfToken},
    server_root::ServerRoot,
};
use crate::http::{FetchRequest, FetchResponse, Fetcher};

/// Endpoint a login submission is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginEntryPoint {
    /// A plain notebook server: credentials go to `login?` under the root.
    Notebook,
    /// A hub-fronted deployment: credentials go to `hub/login?`.
    Hub,
}

impl LoginEntryPoint {
    /// Absolute URL of the login endpoint under `root`.
    pub(crate) fn login_url(&self, root: &ServerRoot) -> String {
        match self {
            LoginEntryPoint::Notebook => root.join("login?"),
            LoginEntryPoint::Hub => root.join("hub/login?"),
        }
    }
}

/// Everything needed to submit the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChallenge {
    /// Anti-forgery token collected from the login page.
    pub xsrf: XsrfToken,
    /// Where the credentials must be posted.
    pub entry_point: LoginEntryPoint,
}

/// What a server demands before it will accept requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRequirement {
    /// The server answered an unauthenticated probe; no credentials needed.
    NotRequired,
    /// The server serves a login page; credentials must be submitted.
    Password(PasswordChallenge),
    /// No usable handshake is available: neither the login page nor the
    /// tree page answered, or the login page lacked the anti-forgery cookie.
    Unreachable,
}

impl AuthRequirement {
    /// Probes `root` to find out whether it wants a password.
    ///
    /// Transport faults are treated as unsuccessful probes rather than
    /// errors; unreachability has its own variant.
    pub(crate) async fn probe(root: &ServerRoot, fetcher: &dyn Fetcher) -> Self {
        let login_page = match probe_get(&root.join("login?"), fetcher).await {
            Some(response) if response.ok => Some(response),
            _ => None,
        };

        let Some(login_page) = login_page else {
            // No login page: either the server runs without a password and
            // serves its content directly, or there is no server at all.
            // The tree page settles which.
            let tree_answered = probe_get(&root.join("tree?"), fetcher)
                .await
                .is_some_and(|response| response.ok);

            return if tree_answered {
                debug!(root = %root, "Tree page answered without credentials; no password required");
                AuthRequirement::NotRequired
            } else {
                debug!(root = %root, "Neither login page nor tree page answered");
                AuthRequirement::Unreachable
            };
        };

        let Some(xsrf) = cookies::extract_xsrf_token(&login_page.headers) else {
            warn!(root = %root, "Login page did not set an _xsrf cookie; cannot submit credentials");
            return AuthRequirement::Unreachable;
        };

        let hub_answered = probe_get(&root.join("hub/api"), fetcher)
            .await
            .is_some_and(|response| response.ok);
        let entry_point = if hub_answered || root.looks_hub_spawned() {
            LoginEntryPoint::Hub
        } else {
            LoginEntryPoint::Notebook
        };

        AuthRequirement::Password(PasswordChallenge { xsrf, entry_point })
    }
}

/// Performs a keep-alive GET, mapping transport faults to `None`.
async fn probe_get(url: &str, fetcher: &dyn Fetcher) -> Option<FetchResponse> {
    let request = FetchRequest::get(url, keep_alive_headers());

    match fetcher.fetch(request).await {
        Ok(response) => Some(response),
        Err(error) => {
            debug!(url, %error, "Probe request failed at the transport level");
            None
        }
    }
}

/// The header set carried by every request of the handshake.
pub(crate) fn keep_alive_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers
}
