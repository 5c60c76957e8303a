#![doc = include_str!("../README.md")]

pub mod connect;
mod disposable;
mod error;
pub mod http;
mod prompt;
mod settings;

pub use connect::{
    AuthRequirement, ConnectionInfo, LoginEntryPoint, PasswordChallenge, PasswordConnectClient,
    ServerRoot, SessionCookie, XsrfToken,
};
pub use disposable::{AsyncDisposable, AsyncDisposableRegistry};
pub use error::{FetchError, LoginError};
pub use http::{FetchRequest, FetchResponse, Fetcher, ReqwestFetcher};
pub use prompt::{NoPasswordPrompt, PasswordPrompt, PasswordPromptOptions};
pub use settings::GatewaySettings;

#[cfg(test)]
pub(crate) mod test_util;
