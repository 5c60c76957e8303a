use reqwest::redirect::Policy;

use super::{FetchRequest, FetchResponse, Fetcher};
use crate::{error::FetchError, settings::GatewaySettings};

/// Production [`Fetcher`] backed by a `reqwest` client.
///
/// Redirects are never followed, so the login handshake can observe the raw
/// redirect status and collect the session cookie it carries.
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// Builds a transport that accepts or rejects server certificates that
    /// fail chain validation, depending on `allow_unauthorized`.
    pub fn new(allow_unauthorized: bool) -> Result<Self, FetchError> {
        Self::with_settings(&GatewaySettings {
            allow_unauthorized,
            ..GatewaySettings::default()
        })
    }

    /// Builds a transport from the full gateway settings.
    pub fn with_settings(settings: &GatewaySettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .redirect(Policy::none())
            .danger_accept_invalid_certs(settings.allow_unauthorized);

        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, request: FetchRequest) -> Result<FetchResponse, FetchError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;

        Ok(FetchResponse::new(
            response.status(),
            response.headers().clone(),
        ))
    }
}
