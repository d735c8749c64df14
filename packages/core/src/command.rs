//! Credential acquisition command
//!
//! Resolves a [`ParameterSet`] into at most one [`Credential`]. A credential
//! supplied by the caller is passed through untouched; otherwise the injected
//! [`HostPrompter`] is asked for one.

use tracing::{debug, warn};

use crate::credential::Credential;
use crate::error::ErrorRecord;
use crate::params::{ParameterSet, PromptConfig};
use crate::prompter::{HostPrompter, PromptError, PromptRequest};

/// Result of a single invocation
#[derive(Debug)]
pub enum Outcome {
    /// One credential to write to the output stream
    Emitted(Credential),
    /// No credential; one non-fatal error for the error stream
    Reported(ErrorRecord),
    /// No credential and no error
    Empty,
}

impl Outcome {
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            Outcome::Emitted(cred) => Some(cred),
            _ => None,
        }
    }

    pub fn error_record(&self) -> Option<&ErrorRecord> {
        match self {
            Outcome::Reported(record) => Some(record),
            _ => None,
        }
    }
}

/// Produces a credential from caller input or an interactive prompt
pub struct CredentialAcquisitionCommand<P> {
    prompter: P,
}

impl<P: HostPrompter> CredentialAcquisitionCommand<P> {
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Run the command once
    ///
    /// Invalid-argument failures from the prompter are downgraded to
    /// [`Outcome::Reported`]. Any other prompter failure is returned as `Err`.
    pub fn execute(&self, input: ParameterSet) -> Result<Outcome, PromptError> {
        let request = match input {
            ParameterSet::DirectCredential {
                credential: Some(credential),
                ..
            } => {
                debug!(username = credential.username(), "Using caller-supplied credential");
                return Ok(Outcome::Emitted(credential));
            }
            ParameterSet::DirectCredential {
                credential: None,
                confirm_password,
            } => {
                debug!("No credential supplied, falling back to prompt");
                prompt_request(PromptConfig::default().with_confirm_password(confirm_password))
            }
            ParameterSet::PromptConfig(config) => prompt_request(config),
        };

        debug!(
            title = %request.title,
            user_name = ?request.user_name,
            confirm_password = request.confirm_password,
            "Prompting for credential"
        );

        match self.prompter.prompt_for_credential(&request) {
            Ok(Some(credential)) => Ok(Outcome::Emitted(credential)),
            Ok(None) => {
                debug!("Prompt returned no credential");
                Ok(Outcome::Empty)
            }
            Err(err) if err.is_invalid_argument() => {
                warn!(error = %err, "Could not prompt for credential");
                Ok(Outcome::Reported(ErrorRecord::could_not_prompt(err)))
            }
            Err(err) => Err(err),
        }
    }
}

fn prompt_request(config: PromptConfig) -> PromptRequest {
    PromptRequest {
        title: config.title,
        message: config.message,
        user_name: config.user_name,
        domain: String::new(),
        confirm_password: config.confirm_password,
    }
}
