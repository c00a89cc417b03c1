//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use facl_core::Id;

/// facl - POSIX-style ACL permission checks
#[derive(Parser, Debug)]
#[command(name = "facl")]
#[command(author, version, about = "Evaluate POSIX-style ACLs", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FACL_CONFIG")]
    pub config: Option<String>,

    /// ACL source file (defaults to the configured source, then the built-in fixture)
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    /// Owning uid of the protected object (overrides config)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub owner_uid: Option<Id>,

    /// Owning gid of the protected object (overrides config)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub owner_gid: Option<Id>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check whether an identity holds the requested permissions
    Check {
        /// Effective uid of the accessor
        #[arg(long, allow_negative_numbers = true)]
        uid: Id,

        /// Effective gid of the accessor
        #[arg(long, allow_negative_numbers = true)]
        gid: Id,

        /// Requested permissions, any of r, w, x (e.g. "rw")
        #[arg(short, long)]
        perm: String,

        /// Print the full resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the ACL entries
    Show,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,

    /// Print a configuration value by dotted key (e.g. owner.uid)
    Get {
        /// Dotted key
        key: String,
    },

    /// Write a default configuration file
    Init {
        /// Target file (defaults to the resolved config path)
        #[arg(long)]
        file: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
