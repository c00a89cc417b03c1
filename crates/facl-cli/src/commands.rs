//! Command execution.
//!
//! [`run`] performs a parsed command and returns an [`Outcome`]; it never
//! prints. `main` decides how the outcome reaches stdout and which exit code
//! it maps to.

use facl_acl::{Acl, OwnerIdentity, Resolution, Resolver};
use facl_core::{Error, Identity, Permissions, Result};

use crate::cli::{Cli, Command};
use crate::config::FaclConfig;
use crate::config_handlers::handle_config_command;

/// Exit code for a granted check or any successful non-check command.
pub const EXIT_GRANTED: i32 = 0;

/// Exit code for a denied check.
pub const EXIT_DENIED: i32 = 1;

/// Exit code for errors, including an unavailable ACL source.
pub const EXIT_ERROR: i32 = 2;

/// Structured result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An access decision.
    Decision {
        /// How the request was decided.
        resolution: Resolution,
        /// Print as JSON instead of a single word.
        json: bool,
    },
    /// An ACL listing.
    Listing(String),
    /// Free-form text (config commands).
    Message(String),
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Decision { resolution, .. } if !resolution.granted => EXIT_DENIED,
            _ => EXIT_GRANTED,
        }
    }

    /// Text to print on stdout.
    pub fn to_output(&self) -> Result<String> {
        match self {
            Outcome::Decision { resolution, json: true } => serde_json::to_string_pretty(resolution)
                .map_err(|e| Error::serialization(e.to_string())),
            Outcome::Decision { resolution, json: false } => Ok(if resolution.granted {
                "granted".to_string()
            } else {
                "denied".to_string()
            }),
            Outcome::Listing(text) => Ok(text.trim_end().to_string()),
            Outcome::Message(text) => Ok(text.clone()),
        }
    }
}

/// Execute `cli`.
pub fn run(cli: &Cli) -> Result<Outcome> {
    match &cli.command {
        Command::Config { action } => {
            handle_config_command(cli.config.as_deref(), action).map(Outcome::Message)
        }
        Command::Show => {
            let config = FaclConfig::load(cli.config.as_deref())?;
            let acl = obtain_acl(cli, &config)?;
            Ok(Outcome::Listing(facl_acl::render(&acl)))
        }
        Command::Check {
            uid,
            gid,
            perm,
            json,
        } => {
            let requested = Permissions::from_request(perm)?;
            let config = FaclConfig::load(cli.config.as_deref())?;
            let acl = obtain_acl(cli, &config)?;
            let resolver = Resolver::new(owner_identity(cli, &config));
            let resolution = resolver.resolve(&acl, Identity::new(*uid, *gid), requested);
            Ok(Outcome::Decision {
                resolution,
                json: *json,
            })
        }
    }
}

/// The owner identity: CLI flags override the config file.
pub fn owner_identity(cli: &Cli, config: &FaclConfig) -> OwnerIdentity {
    OwnerIdentity::new(
        cli.owner_uid.unwrap_or(config.owner.uid),
        cli.owner_gid.unwrap_or(config.owner.gid),
    )
}

/// The ACL to evaluate: `--source`, then the configured source, then the
/// built-in fixture.
pub fn obtain_acl(cli: &Cli, config: &FaclConfig) -> Result<Acl> {
    match cli.source.as_ref().or(config.source.as_ref()) {
        Some(path) => Acl::load(path),
        None => {
            log::info!("No ACL source configured, using the built-in fixture");
            Ok(Acl::build_default())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use facl_acl::Category;

    fn decision(granted: bool) -> Outcome {
        let resolution = Resolution {
            granted,
            category: Category::Other,
            effective: Permissions::READ,
            requested: Permissions::READ,
        };
        Outcome::Decision {
            resolution,
            json: false,
        }
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(decision(true).exit_code(), EXIT_GRANTED);
        assert_eq!(decision(false).exit_code(), EXIT_DENIED);
        assert_eq!(Outcome::Message("ok".into()).exit_code(), EXIT_GRANTED);
        assert_eq!(Outcome::Listing(String::new()).exit_code(), EXIT_GRANTED);
    }

    #[test]
    fn test_decision_output() {
        assert_eq!(decision(true).to_output().unwrap(), "granted");
        assert_eq!(decision(false).to_output().unwrap(), "denied");
    }

    #[test]
    fn test_listing_output_trims_trailing_newline() {
        let outcome = Outcome::Listing("Entry 0: x\n".into());
        assert_eq!(outcome.to_output().unwrap(), "Entry 0: x");
    }
}
