//! get-credential CLI - produce a credential for downstream tools
//!
//! This module contains the CLI implementation used by the binary.

mod binding;
mod output;
mod prompter;

pub use binding::{CredentialArgs, resolve_parameter_set};
pub use prompter::TerminalPrompter;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use get_credential_core::config::{
    display_validation_error, display_validation_warning, validate_config,
};
use get_credential_core::{
    CredentialAcquisitionCommand, Outcome, OutputFormat, get_version, load_config_or_default,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Produce a credential, either passed through or prompted for
#[derive(Parser, Debug)]
#[command(name = "get-credential")]
#[command(version = get_version())]
#[command(about = "Produce a username/secret credential for downstream tools", long_about = None)]
#[command(
    after_help = "Without --credential the operator is prompted. Pipe a secret with --credential USER --password-stdin to skip prompting."
)]
pub struct Cli {
    #[command(flatten)]
    pub credential: CredentialArgs,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase verbosity level
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Map `-v` occurrences to a default log filter
fn default_log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize tracing on stderr; `RUST_LOG` takes precedence over `-v`
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Configure color output
    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_tracing(cli.verbose);

    let config = load_config_or_default().context("Failed to load configuration")?;
    match validate_config(&config) {
        Ok(warnings) => warnings.iter().for_each(display_validation_warning),
        Err(error) => {
            display_validation_error(&error);
            bail!("Invalid configuration field '{}'", error.field);
        }
    }

    let format = cli.format.unwrap_or(config.output_format);
    let params = resolve_parameter_set(&cli.credential, &config, std::io::stdin().lock())?;

    let command =
        CredentialAcquisitionCommand::new(TerminalPrompter::new(config.allow_empty_password));
    let outcome = command
        .execute(params)
        .context("Could not prompt for credential")?;

    let mut stdout = std::io::stdout().lock();
    emit_outcome(outcome, format, &mut stdout)
}

/// Write the outcome of one invocation and pick the exit code
///
/// Only an emitted credential touches `out`. A reported record goes to stderr
/// and exits 1; an empty result exits 0 silently.
fn emit_outcome(outcome: Outcome, format: OutputFormat, out: &mut impl Write) -> Result<ExitCode> {
    match outcome {
        Outcome::Emitted(credential) => {
            let rendered = output::render_credential(&credential, format)?;
            out.write_all(rendered.as_bytes())
                .context("Failed to write credential to stdout")?;
            out.flush().context("Failed to flush stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Reported(record) => {
            output::show_error_record(&record);
            Ok(ExitCode::FAILURE)
        }
        Outcome::Empty => {
            debug!("No credential produced");
            Ok(ExitCode::SUCCESS)
        }
    }
}
