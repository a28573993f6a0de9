//! promptpack: build a text-expansion snippet package from YAML prompts.
//!
//! This is the main entry point for the `promptpack` CLI. It parses
//! arguments, sets up logging, dispatches to the appropriate command
//! handler, and handles errors with proper exit codes.

mod assemble;
mod cli;
mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod manifest;
pub mod package;
pub mod prompt;
pub mod template;
pub mod validate;
pub mod yaml;

use cli::Cli;
use std::process::ExitCode;

fn setup_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_logging(cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
