//! Error record formatting
//!
//! Renders non-fatal error records produced by the credential command in the
//! same styled block used for other CLI errors.

use console::style;
use get_credential_core::{ErrorRecord, PromptError};

/// Format an error record with a hint for the operator
pub fn format_error_record(record: &ErrorRecord) -> String {
    let hint = match &record.cause {
        PromptError::InvalidArgument { argument, .. } => match argument.as_str() {
            "title" => "Shorten --title or remove control characters from it.",
            "message" => "Shorten --message or remove control characters from it.",
            "user name" => "Shorten --user-name or remove control characters from it.",
            _ => "Check the prompt arguments.",
        },
        _ => "Check the prompt arguments.",
    };

    format!(
        "{} {}\n\n  {}  {}\n  {}  {}\n\n  {}",
        style("Error:").red().bold(),
        style(record.id).bold(),
        style("Category:").dim(),
        record.category,
        style("Reason:").dim(),
        record.cause,
        style(hint).cyan()
    )
}

/// Show an error record on stderr
///
/// Prints a blank line before the record for visual separation.
pub fn show_error_record(record: &ErrorRecord) {
    let msg = format_error_record(record);
    eprintln!();
    eprintln!("{msg}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_includes_tag_category_and_reason() {
        console::set_colors_enabled(false);
        let record = ErrorRecord::could_not_prompt(PromptError::invalid_argument(
            "title",
            "129 characters exceeds the maximum of 128",
        ));
        let msg = format_error_record(&record);
        assert!(msg.contains("CouldNotPromptForCredential"));
        assert!(msg.contains("InvalidOperation"));
        assert!(msg.contains("maximum of 128"));
        assert!(msg.contains("--title"));
    }

    #[test]
    fn format_hint_for_user_name() {
        let record = ErrorRecord::could_not_prompt(PromptError::invalid_argument(
            "user name",
            "contains control character U+001B",
        ));
        let msg = format_error_record(&record);
        assert!(msg.contains("--user-name"));
    }
}
