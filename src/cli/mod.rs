//! Command-line interface.
//!
//! Parsing lives in [`parser`], command logic in [`commands`]. Commands
//! return rendered output; the binary entry point owns stdout.

pub mod commands;
pub mod parser;

pub use commands::{OutputFormat, execute};
pub use parser::{Cli, Commands};
