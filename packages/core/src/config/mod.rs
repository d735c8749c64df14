//! Configuration management for get-credential
//!
//! The config file is optional. A missing file yields defaults; a present file
//! is parsed as JSONC (comments and trailing commas allowed).

pub mod schema;
pub mod validation;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

pub use schema::{Config, OutputFormat};
pub use validation::{
    ValidationError, ValidationWarning, display_validation_error, display_validation_warning,
    validate_config,
};

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "GET_CREDENTIAL_CONFIG";

const CONFIG_FILE_NAME: &str = "config.json";

/// Errors raised while loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Resolve the config file path
///
/// `GET_CREDENTIAL_CONFIG` wins; otherwise the platform config directory.
/// Returns None if no home directory can be determined.
pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    ProjectDirs::from("", "", "get-credential").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Load config from the default location, or defaults if it does not exist
pub fn load_config_or_default() -> Result<Config, ConfigError> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => {
            debug!("No config directory available, using defaults");
            Ok(Config::default())
        }
    }
}

/// Load config from an explicit path, or defaults if it does not exist
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_config(contents: &str) -> Result<Config, String> {
    let value = jsonc_parser::parse_to_serde_value(contents, &Default::default())
        .map_err(|e| e.to_string())?;
    match value {
        Some(value) => serde_json::from_value(value).map_err(|e| e.to_string()),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_jsonc_with_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
                // emit JSON for scripts
                "version": 1,
                "output_format": "json",
                "confirm_password": true,
            }}"#
        )
        .unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.confirm_password);
    }

    #[test]
    fn test_load_file_without_version() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"output_format": "json"}}"#).unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.version, 1);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"version": 1, "colour": "red"}}"#).unwrap();

        let err = load_config_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            load_config_from(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }
}
