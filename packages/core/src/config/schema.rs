//! Configuration schema for get-credential
//!
//! Defines the structure and defaults for the config.json file.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How an emitted credential is written to stdout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `username=...` / `password=...` lines
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Main configuration structure for get-credential
///
/// Serialized to/from `~/.config/get-credential/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations (default: 1)
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output format for emitted credentials (default: "text")
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Ask for the secret twice unless overridden on the command line (default: false)
    #[serde(default)]
    pub confirm_password: bool,

    /// Accept an empty secret at the terminal prompt (default: false)
    #[serde(default)]
    pub allow_empty_password: bool,
}

/// Current config file version
pub const CONFIG_VERSION: u32 = 1;

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            output_format: OutputFormat::default(),
            confirm_password: false,
            allow_empty_password: false,
        }
    }
}
