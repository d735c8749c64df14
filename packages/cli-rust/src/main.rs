//! get-credential - produce a credential for downstream tools
//!
//! This is the main entry point for the Rust CLI binary.

use std::process::ExitCode;

use console::style;

fn main() -> ExitCode {
    match get_credential::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", style("Error:").red().bold());
            ExitCode::FAILURE
        }
    }
}
