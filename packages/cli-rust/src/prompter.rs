//! Terminal host prompter
//!
//! Collects a credential interactively with dialoguer. Prompts are drawn on
//! stderr so stdout only ever carries the emitted credential.

use std::io;

use console::{Term, style};
use dialoguer::{Input, Password};
use get_credential_core::{Credential, HostPrompter, PromptError, PromptRequest};
use tracing::debug;

/// dialoguer-backed [`HostPrompter`]
pub struct TerminalPrompter {
    term: Term,
    allow_empty_password: bool,
}

impl TerminalPrompter {
    /// Create a prompter drawing on stderr
    pub fn new(allow_empty_password: bool) -> Self {
        Self::with_term(Term::stderr(), allow_empty_password)
    }

    pub fn with_term(term: Term, allow_empty_password: bool) -> Self {
        Self {
            term,
            allow_empty_password,
        }
    }

    fn print_header(&self, request: &PromptRequest) -> io::Result<()> {
        self.term.write_line("")?;
        self.term
            .write_line(&style(&request.title).bold().to_string())?;
        for line in request.message.lines() {
            self.term.write_line(&style(line).dim().to_string())?;
        }
        self.term.write_line("")
    }
}

impl HostPrompter for TerminalPrompter {
    fn prompt_for_credential(
        &self,
        request: &PromptRequest,
    ) -> Result<Option<Credential>, PromptError> {
        request.validate()?;
        if request.title.trim().is_empty() {
            return Err(PromptError::invalid_argument("title", "must not be empty"));
        }

        if !self.term.is_term() {
            return Err(PromptError::NotInteractive);
        }

        self.print_header(request)
            .map_err(|e| PromptError::Io(e.to_string()))?;

        let username = match Input::<String>::new()
            .with_prompt("User")
            .with_initial_text(request.user_name.clone().unwrap_or_default())
            .allow_empty(true)
            .interact_text_on(&self.term)
        {
            Ok(username) => username,
            Err(e) => return dismissed_or_failed(e),
        };

        let Some(username) = entered_username(username) else {
            debug!("Empty username entered, treating prompt as dismissed");
            return Ok(None);
        };

        let mut password = Password::new()
            .with_prompt("Password")
            .allow_empty_password(self.allow_empty_password);
        if request.confirm_password {
            password = password.with_confirmation("Confirm password", "Passwords do not match");
        }

        let secret = match password.interact_on(&self.term) {
            Ok(secret) => secret,
            Err(e) => return dismissed_or_failed(e),
        };

        Ok(Some(Credential::new(username, secret)))
    }
}

/// A blank entry dismisses the prompt; anything else is kept exactly as typed
fn entered_username(input: String) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input)
    }
}

/// Interrupted reads mean the operator backed out of the prompt
fn dismissed_or_failed(err: dialoguer::Error) -> Result<Option<Credential>, PromptError> {
    match err {
        dialoguer::Error::IO(io_err) if io_err.kind() == io::ErrorKind::Interrupted => {
            debug!("Prompt interrupted by operator");
            Ok(None)
        }
        other => Err(PromptError::Io(other.to_string())),
    }
}
