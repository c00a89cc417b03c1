//! facl CLI
//!
//! Evaluate POSIX-style ACL permission checks from the command line.
//! Exit status: 0 granted (or success), 1 denied, 2 error.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use facl_cli::{Cli, EXIT_ERROR, FaclConfig, logging, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = FaclConfig::load(cli.config.as_deref())
        .map(|config| config.log_level)
        .unwrap_or_else(|_| FaclConfig::default().log_level);
    logging::init(&log_level, cli.verbose);
    tracing::debug!(?cli, "Parsed arguments");

    match execute(&cli) {
        Ok(code) => exit_code(code),
        Err(e) => {
            eprintln!("facl: {e:#}");
            exit_code(EXIT_ERROR)
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<i32> {
    let outcome = run(cli)?;
    println!("{}", outcome.to_output()?);
    Ok(outcome.exit_code())
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX))
}
