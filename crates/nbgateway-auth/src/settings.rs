use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Behavior settings for connecting to a notebook gateway. They are optional
/// and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use nbgateway_auth::GatewaySettings;
/// let settings = GatewaySettings {
///     allow_unauthorized: false,
///     request_timeout_secs: None,
/// };
/// let default = GatewaySettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GatewaySettings {
    /// Accept server certificates that fail chain validation (self-signed
    /// deployments). Defaults to `false`.
    pub allow_unauthorized: bool,
    /// Per-request timeout in seconds. Defaults to the transport's own
    /// timeout behavior when unset.
    pub request_timeout_secs: Option<u64>,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            allow_unauthorized: false,
            request_timeout_secs: None,
        }
    }
}

impl GatewaySettings {
    pub(crate) fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
