//! Binary entry point for docsift-rs.
//!
//! Parses the CLI, initializes logging to stderr, dispatches the command,
//! and writes the rendered output to stdout.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsift_rs::cli::{Cli, commands};

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout carries only command output. `RUST_LOG`
/// overrides the level; `--verbose` raises the default from `info` to
/// `debug`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("docsift_rs={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses arguments and executes the selected command.
fn run() -> Result<String> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    Ok(commands::execute(&cli)?)
}

fn main() -> ExitCode {
    match run() {
        Ok(output) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            if writeln!(handle, "{}", output.trim_end()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            let _ = writeln!(handle, "error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
