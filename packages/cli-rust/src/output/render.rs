//! Credential rendering
//!
//! The only place the secret is exposed: writing the emitted credential to
//! stdout for the downstream consumer.

use anyhow::{Result, bail};
use get_credential_core::{Credential, OutputFormat};
use secrecy::ExposeSecret;
use serde::Serialize;

#[derive(Serialize)]
struct CredentialOut<'a> {
    username: &'a str,
    password: &'a str,
}

/// Render a credential in the requested format, newline-terminated
pub fn render_credential(credential: &Credential, format: OutputFormat) -> Result<String> {
    let out = CredentialOut {
        username: credential.username(),
        password: credential.secret().expose_secret(),
    };

    match format {
        OutputFormat::Text => {
            check_line_safe("username", out.username)?;
            check_line_safe("password", out.password)?;
            Ok(format!(
                "username={}\npassword={}\n",
                out.username, out.password
            ))
        }
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(&out)?)),
    }
}

/// Text output is line-oriented; a value must not start a new line
fn check_line_safe(field: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r', '\0']) {
        bail!("Cannot write {field} as text: it contains a line break or NUL (use --format json)");
    }
    Ok(())
}
