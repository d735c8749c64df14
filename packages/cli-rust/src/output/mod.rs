//! Output utilities for the CLI
//!
//! Credential rendering for stdout and styled error records for stderr.

pub mod errors;
pub mod render;

pub use errors::show_error_record;
pub use render::render_credential;
