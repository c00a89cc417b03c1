//! # facl-cli
//!
//! Command-line harness for facl.
//!
//! This crate provides the `facl` binary and the pieces behind it:
//! - Argument parsing ([`cli`])
//! - Configuration file handling ([`config`], [`config_handlers`])
//! - Command execution returning structured results ([`commands`])
//! - Logging setup ([`logging`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod logging;

pub use cli::{Cli, Command, ConfigAction};
pub use commands::{EXIT_DENIED, EXIT_ERROR, EXIT_GRANTED, Outcome, run};
pub use config::FaclConfig;
pub use facl_core::{Error, Result};
