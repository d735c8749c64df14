//! Host prompter abstraction
//!
//! The credential command never talks to a terminal or window system itself.
//! It hands a [`PromptRequest`] to a [`HostPrompter`], which is responsible for
//! rendering the prompt, collecting input and (optionally) confirming the
//! secret.
//!
//! - [`MockPrompter`]: scripted implementation for tests
//!
//! Interactive implementations live in the binary crate.

mod mock;

pub use mock::MockPrompter;

use crate::credential::Credential;

/// Longest caption a host prompt accepts
pub const MAX_TITLE_LEN: usize = 128;

/// Longest message body a host prompt accepts
pub const MAX_MESSAGE_LEN: usize = 1024;

/// Longest username a host prompt accepts
pub const MAX_USER_NAME_LEN: usize = 513;

/// Error type for prompt operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    /// A presentation argument was rejected before prompting.
    #[error("invalid {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// No interactive terminal is available.
    #[error("cannot prompt for credentials: no interactive terminal")]
    NotInteractive,

    /// Reading operator input failed.
    #[error("prompt I/O failed: {0}")]
    Io(String),
}

impl PromptError {
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is the argument-rejection kind the command downgrades
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Everything a prompter needs to render one credential prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub title: String,
    pub message: String,
    pub user_name: Option<String>,
    /// Always empty when issued by the credential command
    pub domain: String,
    pub confirm_password: bool,
}

impl PromptRequest {
    /// Check presentation arguments against host prompt limits
    ///
    /// Returns the first violation as [`PromptError::InvalidArgument`].
    pub fn validate(&self) -> Result<(), PromptError> {
        check_length("title", &self.title, MAX_TITLE_LEN)?;
        check_no_control("title", &self.title, false)?;

        check_length("message", &self.message, MAX_MESSAGE_LEN)?;
        check_no_control("message", &self.message, true)?;

        if let Some(ref user_name) = self.user_name {
            check_length("user name", user_name, MAX_USER_NAME_LEN)?;
            check_no_control("user name", user_name, false)?;
        }

        Ok(())
    }
}

fn check_length(argument: &str, value: &str, max: usize) -> Result<(), PromptError> {
    let len = value.chars().count();
    if len > max {
        return Err(PromptError::invalid_argument(
            argument,
            format!("{len} characters exceeds the maximum of {max}"),
        ));
    }
    Ok(())
}

fn check_no_control(argument: &str, value: &str, allow_layout: bool) -> Result<(), PromptError> {
    let offending = value
        .chars()
        .find(|c| c.is_control() && !(allow_layout && (*c == '\n' || *c == '\t')));
    match offending {
        Some(c) => Err(PromptError::invalid_argument(
            argument,
            format!("contains control character U+{:04X}", c as u32),
        )),
        None => Ok(()),
    }
}

/// Capability that interactively collects a credential from an operator
///
/// Implementations block until the operator answers or dismisses the prompt.
/// `Ok(None)` means the prompt produced nothing without failing (for example
/// the operator dismissed it). Argument problems must be reported as
/// [`PromptError::InvalidArgument`].
///
/// Confirmation of the secret when `confirm_password` is set is entirely up to
/// the implementation.
pub trait HostPrompter {
    fn prompt_for_credential(
        &self,
        request: &PromptRequest,
    ) -> Result<Option<Credential>, PromptError>;
}

impl<P: HostPrompter + ?Sized> HostPrompter for &P {
    fn prompt_for_credential(
        &self,
        request: &PromptRequest,
    ) -> Result<Option<Credential>, PromptError> {
        (**self).prompt_for_credential(request)
    }
}

impl<P: HostPrompter + ?Sized> HostPrompter for Box<P> {
    fn prompt_for_credential(
        &self,
        request: &PromptRequest,
    ) -> Result<Option<Credential>, PromptError> {
        (**self).prompt_for_credential(request)
    }
}
