//! Trait definitions for asking the user for credentials. The host
//! application supplies the implementation, an input box in an editor or a
//! terminal prompt in a CLI.

/// Options for a single input-box request shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPromptOptions {
    /// Message displayed above the input field.
    pub prompt: String,
    /// Mask the typed value.
    pub password: bool,
}

impl PasswordPromptOptions {
    /// The standard options used when asking for a notebook server password.
    pub fn server_password() -> Self {
        Self {
            prompt: "Please enter the password for your notebook server".to_string(),
            password: true,
        }
    }
}

/// User-interface capability for collecting a password.
///
/// Returning `None` means the user dismissed the prompt; the caller treats
/// this as a cancelled connection attempt and never submits credentials.
#[async_trait::async_trait]
pub trait PasswordPrompt: Send + Sync {
    /// Show a (possibly masked) input box and wait for the user's answer.
    async fn show_input_box(&self, options: PasswordPromptOptions) -> Option<String>;
}

/// A prompt that never supplies a password. Useful for testing or for hosts
/// that only talk to servers without password protection.
#[derive(Clone, Copy)]
pub struct NoPasswordPrompt;

#[async_trait::async_trait]
impl PasswordPrompt for NoPasswordPrompt {
    async fn show_input_box(&self, _options: PasswordPromptOptions) -> Option<String> {
        None
    }
}
