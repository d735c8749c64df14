//! Parameter sets accepted by the credential command
//!
//! The binding layer resolves command-line input into exactly one
//! [`ParameterSet`] before the command runs.

use crate::credential::Credential;

/// Prompt body shown when no message is supplied
pub const DEFAULT_MESSAGE: &str = "Enter your credentials.";

/// Prompt caption shown when no title is supplied
pub const DEFAULT_TITLE: &str = "Credential request";

/// The two mutually exclusive ways of invoking the command
#[derive(Debug, Clone)]
pub enum ParameterSet {
    /// Caller already holds a credential
    DirectCredential {
        credential: Option<Credential>,
        confirm_password: bool,
    },
    /// Credential is collected interactively
    PromptConfig(PromptConfig),
}

impl ParameterSet {
    /// Direct mode with a credential present
    pub fn direct(credential: Credential) -> Self {
        Self::DirectCredential {
            credential: Some(credential),
            confirm_password: false,
        }
    }

    /// Prompt mode with all defaults
    pub fn prompt() -> Self {
        Self::PromptConfig(PromptConfig::default())
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self::prompt()
    }
}

impl From<PromptConfig> for ParameterSet {
    fn from(config: PromptConfig) -> Self {
        Self::PromptConfig(config)
    }
}

/// Presentation parameters for prompt mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    /// Prompt body text
    pub message: String,
    /// Username to pre-fill, if any
    pub user_name: Option<String>,
    /// Prompt caption
    pub title: String,
    /// Ask the operator to enter the secret twice
    pub confirm_password: bool,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            user_name: None,
            title: DEFAULT_TITLE.to_string(),
            confirm_password: false,
        }
    }
}

impl PromptConfig {
    /// Create a prompt config with default message and title
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn with_confirm_password(mut self, confirm: bool) -> Self {
        self.confirm_password = confirm;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompt_config() {
        let config = PromptConfig::default();
        assert_eq!(config.message, "Enter your credentials.");
        assert_eq!(config.title, "Credential request");
        assert!(config.user_name.is_none());
        assert!(!config.confirm_password);
    }

    #[test]
    fn test_builder_overrides_fields() {
        let config = PromptConfig::new()
            .with_message("Enter creds")
            .with_title("Auth")
            .with_user_name("alice")
            .with_confirm_password(true);
        assert_eq!(config.message, "Enter creds");
        assert_eq!(config.title, "Auth");
        assert_eq!(config.user_name.as_deref(), Some("alice"));
        assert!(config.confirm_password);
    }

    #[test]
    fn test_default_parameter_set_is_prompt_mode() {
        match ParameterSet::default() {
            ParameterSet::PromptConfig(config) => assert_eq!(config, PromptConfig::default()),
            other => panic!("expected prompt mode, got {other:?}"),
        }
    }
}
