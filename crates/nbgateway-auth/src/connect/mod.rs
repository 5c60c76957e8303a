//! Resolving a gateway root URL into reusable connection headers.

/// Header set handed back to callers after a server is resolved.
pub mod connection_info;
/// Cookie extraction from `set-cookie` response headers.
pub mod cookies;
/// The password handshake and its per-server memory.
pub mod password_connect;
/// Probing a server for its authentication requirements.
pub mod requirement;
/// Root URL normalization.
pub mod server_root;

pub use connection_info::ConnectionInfo;
pub use cookies::{SessionCookie, XsrfToken};
pub use password_connect::PasswordConnectClient;
pub use requirement::{AuthRequirement, LoginEntryPoint, PasswordChallenge};
pub use server_root::ServerRoot;
