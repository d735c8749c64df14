//! Non-terminating error records
//!
//! When prompting fails because the host rejected its arguments, the command
//! does not abort. It produces an [`ErrorRecord`] instead, which the caller
//! writes to its error stream before carrying on.

use std::fmt;

use crate::prompter::PromptError;

/// Stable identifier of a reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorId {
    CouldNotPromptForCredential,
}

impl ErrorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorId::CouldNotPromptForCredential => "CouldNotPromptForCredential",
        }
    }
}

impl fmt::Display for ErrorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad category of a reported error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    InvalidOperation,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::InvalidOperation => f.write_str("InvalidOperation"),
        }
    }
}

/// A reported, non-fatal error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub id: ErrorId,
    pub category: ErrorCategory,
    /// Object the error relates to; the credential command never sets one
    pub target: Option<String>,
    pub cause: PromptError,
}

impl ErrorRecord {
    /// Record for a prompt whose arguments were rejected
    pub fn could_not_prompt(cause: PromptError) -> Self {
        Self {
            id: ErrorId::CouldNotPromptForCredential,
            category: ErrorCategory::InvalidOperation,
            target: None,
            cause,
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.id, self.category, self.cause)
    }
}

impl std::error::Error for ErrorRecord {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
