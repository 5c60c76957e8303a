use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use reqwest::{
    header::{HeaderValue, CONTENT_TYPE, COOKIE},
    StatusCode,
};
use serde::Serialize;
use tracing::{debug, warn};

use super::{
    connection_info::ConnectionInfo,
    cookies,
    requirement::{keep_alive_headers, AuthRequirement, PasswordChallenge},
    server_root::ServerRoot,
};
use crate::{
    disposable::AsyncDisposable,
    error::LoginError,
    http::{FetchRequest, Fetcher, ReqwestFetcher},
    prompt::{PasswordPrompt, PasswordPromptOptions},
    settings::GatewaySettings,
};

/// Content type of the login form submission. Notebook servers expect this
/// exact value, without a space before the charset.
const LOGIN_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";

/// Login form fields, URL-encoded into the POST body.
#[derive(Serialize)]
struct LoginForm<'a> {
    #[serde(rename = "_xsrf")]
    xsrf: &'a str,
    password: &'a str,
}

/// Resolves a notebook-gateway root URL into the request headers a caller
/// needs for all subsequent requests against that server.
///
/// Resolution probes the server first. A server that answers without
/// credentials resolves to an empty header set. A server that serves a
/// login page gets the full handshake: the anti-forgery cookie is collected
/// from the login page, the user is asked for the password through the
/// injected [`PasswordPrompt`], and the credentials are posted to the login
/// endpoint (`hub/login?` on hub deployments). The session cookie issued by
/// the success redirect is combined with the anti-forgery token into the
/// resulting `Cookie` header.
///
/// Failures of any step resolve to `None`; details go to the logs. Resolved
/// servers are remembered per root URL until the client is disposed, so the
/// user is prompted at most once per server.
pub struct PasswordConnectClient {
    prompt: Arc<dyn PasswordPrompt>,
    settings: GatewaySettings,
    resolved: Mutex<HashMap<ServerRoot, Option<ConnectionInfo>>>,
}

impl PasswordConnectClient {
    /// Creates a client that asks for passwords through `prompt`.
    pub fn new(prompt: Arc<dyn PasswordPrompt>, settings: GatewaySettings) -> Self {
        Self {
            prompt,
            settings,
            resolved: Mutex::new(HashMap::new()),
        }
    }

    /// Resolves connection headers for `url`, building the HTTP transport
    /// from the client settings.
    pub async fn get_password_connection_info(&self, url: &str) -> Option<ConnectionInfo> {
        let fetcher = match ReqwestFetcher::with_settings(&self.settings) {
            Ok(fetcher) => fetcher,
            Err(error) => {
                warn!(%error, "Could not build the HTTP transport");
                return None;
            }
        };

        self.get_password_connection_info_with_fetcher(url, &fetcher)
            .await
    }

    /// Resolves connection headers for `url` over a caller-supplied
    /// transport.
    ///
    /// The TLS and timeout policy is whatever `fetcher` was built with; the
    /// client settings are not consulted.
    pub async fn get_password_connection_info_with_fetcher(
        &self,
        url: &str,
        fetcher: &dyn Fetcher,
    ) -> Option<ConnectionInfo> {
        let root = ServerRoot::parse(url)?;

        if let Some(resolved) = self.lookup(&root) {
            debug!(root = %root, "Reusing previously resolved connection info");
            return resolved;
        }

        let info = self.request_connection_info(&root, fetcher).await;
        self.store(root, info.clone());
        info
    }

    /// Runs one full handshake: probe the server, collect the anti-forgery
    /// token, ask for the password and submit it.
    async fn request_connection_info(
        &self,
        root: &ServerRoot,
        fetcher: &dyn Fetcher,
    ) -> Option<ConnectionInfo> {
        match AuthRequirement::probe(root, fetcher).await {
            AuthRequirement::NotRequired => {
                debug!(root = %root, "Server requires no password");
                Some(ConnectionInfo::unauthenticated())
            }
            AuthRequirement::Unreachable => None,
            AuthRequirement::Password(challenge) => {
                let answer = self
                    .prompt
                    .show_input_box(PasswordPromptOptions::server_password())
                    .await;

                let password = match answer {
                    Some(password) if !password.is_empty() => password,
                    _ => {
                        debug!(root = %root, "Password prompt was dismissed");
                        return None;
                    }
                };

                match submit_login(root, &challenge, &password, fetcher).await {
                    Ok(info) => Some(info),
                    Err(error) => {
                        warn!(root = %root, %error, "Login handshake failed");
                        None
                    }
                }
            }
        }
    }

    fn lookup(&self, root: &ServerRoot) -> Option<Option<ConnectionInfo>> {
        self.resolved
            .lock()
            .expect("Mutex is not poisoned")
            .get(root)
            .cloned()
    }

    fn store(&self, root: ServerRoot, info: Option<ConnectionInfo>) {
        self.resolved
            .lock()
            .expect("Mutex is not poisoned")
            .insert(root, info);
    }
}

#[async_trait::async_trait]
impl AsyncDisposable for PasswordConnectClient {
    /// Forgets every resolved server, so the next resolution runs the
    /// handshake (and prompts) again.
    async fn dispose(&self) {
        self.resolved
            .lock()
            .expect("Mutex is not poisoned")
            .clear();
    }
}

/// Posts the login form and turns the resulting cookies into connection
/// headers.
///
/// Notebook servers answer a successful login with a redirect, and re-render
/// the login page with a `200` when the password is wrong. The redirect
/// status is therefore the only success signal; the transport-level `ok`
/// flag is ignored here.
async fn submit_login(
    root: &ServerRoot,
    challenge: &PasswordChallenge,
    password: &str,
    fetcher: &dyn Fetcher,
) -> Result<ConnectionInfo, LoginError> {
    let mut headers = keep_alive_headers();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&challenge.xsrf.to_cookie_header())?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(LOGIN_CONTENT_TYPE));

    let form = LoginForm {
        xsrf: challenge.xsrf.as_str(),
        password,
    };
    let body = serde_urlencoded::to_string(&form).expect("Serialize should be infallible");

    let url = challenge.entry_point.login_url(root);
    let response = fetcher.fetch(FetchRequest::post(url, headers, body)).await?;

    if response.status != StatusCode::FOUND {
        return Err(LoginError::Rejected {
            status: response.status,
        });
    }

    let session = cookies::extract_session_cookie(&response.headers)
        .ok_or(LoginError::MissingSessionCookie)?;

    Ok(ConnectionInfo::authenticated(&challenge.xsrf, &session)?)
}
