//! get-credential-core - credential acquisition for get-credential
//!
//! This library provides:
//! - The [`Credential`] value type
//! - Parameter sets for direct and prompt mode
//! - The [`HostPrompter`] abstraction and a scripted mock
//! - The [`CredentialAcquisitionCommand`] and its non-fatal error records
//! - Configuration loading and validation

pub mod command;
pub mod config;
pub mod credential;
pub mod error;
pub mod params;
pub mod prompter;

pub use command::{CredentialAcquisitionCommand, Outcome};
pub use config::{Config, ConfigError, OutputFormat, load_config_or_default};
pub use credential::Credential;
pub use error::{ErrorCategory, ErrorId, ErrorRecord};
pub use params::{DEFAULT_MESSAGE, DEFAULT_TITLE, ParameterSet, PromptConfig};
pub use prompter::{HostPrompter, MockPrompter, PromptError, PromptRequest};

/// Get the version of the get-credential-core library
pub fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
