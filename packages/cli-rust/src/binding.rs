//! Argument binding
//!
//! Turns parsed command-line arguments into the tagged [`ParameterSet`] the
//! credential command consumes. Conflicting groups are rejected by clap before
//! this runs.

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use clap::Args;
use get_credential_core::{Config, Credential, ParameterSet, PromptConfig};
use tracing::debug;

/// Arguments for the credential command
#[derive(Args, Debug, Default)]
pub struct CredentialArgs {
    /// Username of a credential you already hold (the secret is read from stdin)
    #[arg(
        long,
        value_name = "USER",
        requires = "password_stdin",
        conflicts_with_all = ["message", "user_name", "title"]
    )]
    pub credential: Option<String>,

    /// Read the secret for --credential from the first line of stdin
    #[arg(long, requires = "credential")]
    pub password_stdin: bool,

    /// Prompt body text
    #[arg(long, short)]
    pub message: Option<String>,

    /// Username to pre-fill in the prompt
    #[arg(long, short)]
    pub user_name: Option<String>,

    /// Prompt caption
    #[arg(long, short)]
    pub title: Option<String>,

    /// Require the secret to be entered twice
    #[arg(long)]
    pub confirm_password: bool,
}

/// Build the parameter set for one invocation
///
/// `stdin` is only read in direct mode.
pub fn resolve_parameter_set(
    args: &CredentialArgs,
    config: &Config,
    stdin: impl BufRead,
) -> Result<ParameterSet> {
    let confirm_password = args.confirm_password || config.confirm_password;

    if let Some(ref username) = args.credential {
        debug!(username = %username, "Direct credential mode");
        let secret = read_secret(stdin)?;
        return Ok(ParameterSet::DirectCredential {
            credential: Some(Credential::new(username.clone(), secret)),
            confirm_password,
        });
    }

    let mut prompt = PromptConfig::new().with_confirm_password(confirm_password);
    if let Some(ref message) = args.message {
        prompt = prompt.with_message(message.clone());
    }
    if let Some(ref title) = args.title {
        prompt = prompt.with_title(title.clone());
    }
    if let Some(ref user_name) = args.user_name {
        prompt = prompt.with_user_name(user_name.clone());
    }
    Ok(ParameterSet::PromptConfig(prompt))
}

fn read_secret(mut stdin: impl BufRead) -> Result<String> {
    let mut line = String::new();
    stdin
        .read_line(&mut line)
        .context("Failed to read secret from stdin")?;

    let secret = line.trim_end_matches(['\n', '\r']).to_string();
    if secret.is_empty() {
        bail!("--password-stdin received an empty secret");
    }
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use get_credential_core::{DEFAULT_MESSAGE, DEFAULT_TITLE};
    use secrecy::ExposeSecret;
    use std::io::Cursor;

    #[test]
    fn test_direct_mode_reads_first_line() {
        let args = CredentialArgs {
            credential: Some("alice".to_string()),
            password_stdin: true,
            ..CredentialArgs::default()
        };
        let params =
            resolve_parameter_set(&args, &Config::default(), Cursor::new("hunter2\r\nextra\n"))
                .unwrap();

        match params {
            ParameterSet::DirectCredential {
                credential: Some(cred),
                ..
            } => {
                assert_eq!(cred.username(), "alice");
                assert_eq!(cred.secret().expose_secret(), "hunter2");
            }
            other => panic!("expected direct credential, got {other:?}"),
        }
    }

    #[test]
    fn test_direct_mode_rejects_empty_secret() {
        let args = CredentialArgs {
            credential: Some("alice".to_string()),
            password_stdin: true,
            ..CredentialArgs::default()
        };
        let err = resolve_parameter_set(&args, &Config::default(), Cursor::new("\n")).unwrap_err();
        assert!(err.to_string().contains("empty secret"));
    }

    #[test]
    fn test_prompt_mode_uses_defaults() {
        let params =
            resolve_parameter_set(&CredentialArgs::default(), &Config::default(), Cursor::new(""))
                .unwrap();

        let ParameterSet::PromptConfig(prompt) = params else {
            panic!("expected prompt mode");
        };
        assert_eq!(prompt.message, DEFAULT_MESSAGE);
        assert_eq!(prompt.title, DEFAULT_TITLE);
        assert!(prompt.user_name.is_none());
        assert!(!prompt.confirm_password);
    }

    #[test]
    fn test_prompt_mode_applies_flags() {
        let args = CredentialArgs {
            message: Some("Enter creds".to_string()),
            user_name: Some("alice".to_string()),
            title: Some("Auth".to_string()),
            confirm_password: true,
            ..CredentialArgs::default()
        };
        let params = resolve_parameter_set(&args, &Config::default(), Cursor::new("")).unwrap();

        let ParameterSet::PromptConfig(prompt) = params else {
            panic!("expected prompt mode");
        };
        assert_eq!(prompt.message, "Enter creds");
        assert_eq!(prompt.title, "Auth");
        assert_eq!(prompt.user_name.as_deref(), Some("alice"));
        assert!(prompt.confirm_password);
    }

    #[test]
    fn test_config_enables_confirmation() {
        let config = Config {
            confirm_password: true,
            ..Config::default()
        };
        let params =
            resolve_parameter_set(&CredentialArgs::default(), &config, Cursor::new("")).unwrap();

        let ParameterSet::PromptConfig(prompt) = params else {
            panic!("expected prompt mode");
        };
        assert!(prompt.confirm_password);
    }
}
