//! Configuration validation with actionable error messages
//!
//! Validates the configuration and tells the user how to fix issues.

use super::schema::{CONFIG_VERSION, Config};
use console::style;

/// A configuration validation error with an actionable fix
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The config field that has an error
    pub field: String,
    /// Description of what's wrong
    pub message: String,
    /// What to change in the config file
    pub fix: String,
}

/// A configuration validation warning (non-fatal)
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The config field with a potential issue
    pub field: String,
    /// Description of the warning
    pub message: String,
    /// Suggested change
    pub fix: String,
}

/// Validate configuration and return warnings or first error
///
/// Returns Ok(warnings) if validation passes (possibly with non-fatal warnings).
/// Returns Err(error) on the first fatal validation error encountered.
pub fn validate_config(config: &Config) -> Result<Vec<ValidationWarning>, ValidationError> {
    let mut warnings = Vec::new();

    if config.version == 0 || config.version > CONFIG_VERSION {
        return Err(ValidationError {
            field: "version".to_string(),
            message: format!(
                "Unsupported config version {} (this build understands {CONFIG_VERSION})",
                config.version
            ),
            fix: format!("set \"version\": {CONFIG_VERSION}"),
        });
    }

    // Warnings (non-fatal)

    if config.allow_empty_password && config.confirm_password {
        warnings.push(ValidationWarning {
            field: "allow_empty_password".to_string(),
            message: "Empty passwords are allowed while confirmation is requested".to_string(),
            fix: "set \"allow_empty_password\": false".to_string(),
        });
    }

    Ok(warnings)
}

/// Display a validation error with styled formatting
pub fn display_validation_error(error: &ValidationError) {
    eprintln!();
    eprintln!("{}", style("Error: Configuration error").red().bold());
    eprintln!();
    eprintln!("  {}  {}", style("Field:").dim(), error.field);
    eprintln!("  {}  {}", style("Problem:").dim(), error.message);
    eprintln!();
    eprintln!("{}:", style("To fix").dim());
    eprintln!("  {}", style(&error.fix).cyan());
    eprintln!();
}

/// Display a validation warning with styled formatting
pub fn display_validation_warning(warning: &ValidationWarning) {
    eprintln!();
    eprintln!(
        "{}",
        style("Warning: Configuration warning").yellow().bold()
    );
    eprintln!();
    eprintln!("  {}  {}", style("Field:").dim(), warning.field);
    eprintln!("  {}  {}", style("Issue:").dim(), warning.message);
    eprintln!();
    eprintln!("{}:", style("To address").dim());
    eprintln!("  {}", style(&warning.fix).cyan());
    eprintln!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config_passes() {
        let config = Config::default();
        let warnings = validate_config(&config).unwrap();
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_version_zero_rejected() {
        let config = Config {
            version: 0,
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(err.field, "version");
    }

    #[test]
    fn test_future_version_rejected() {
        let config = Config {
            version: CONFIG_VERSION + 1,
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.message.contains("Unsupported"));
    }

    #[test]
    fn test_empty_password_with_confirmation_warns() {
        let config = Config {
            allow_empty_password: true,
            confirm_password: true,
            ..Config::default()
        };
        let warnings = validate_config(&config).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "allow_empty_password");
    }
}
