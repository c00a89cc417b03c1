//! facl configuration file.
//!
//! ```toml
//! log_level = "warn"
//! source = "/etc/facl/acl.txt"
//!
//! [owner]
//! uid = 1000
//! gid = 2000
//! ```
//!
//! The file lives at `<config dir>/facl/config.toml` unless a path is given
//! with `--config` or `FACL_CONFIG`. Every field is optional.

use std::path::{Path, PathBuf};

use facl_acl::OwnerIdentity;
use facl_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Project name used for the config directory.
pub const PROJECT_NAME: &str = "facl";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaclConfig {
    /// Default log filter when `RUST_LOG` is not set.
    pub log_level: String,

    /// ACL source file used when `--source` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Owner of the protected object.
    pub owner: OwnerIdentity,
}

impl Default for FaclConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            source: None,
            owner: OwnerIdentity::default(),
        }
    }
}

impl FaclConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve the config path: the explicit path if given, else the default.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        match config_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. When no path is given, a missing default
    /// file yields the defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(config_path) else {
            log::debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if config_path.is_some() {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FaclConfig::default();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.source, None);
        assert_eq!(config.owner, OwnerIdentity::new(1000, 2000));
    }

    #[test]
    fn test_parse_partial() {
        let config: FaclConfig = toml::from_str("[owner]\nuid = 0\n").unwrap();
        assert_eq!(config.owner.uid, 0);
        assert_eq!(config.owner.gid, 2000);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_full() {
        let text = "log_level = \"debug\"\nsource = \"/etc/facl/acl.txt\"\n\n[owner]\nuid = 10\ngid = 20\n";
        let config: FaclConfig = toml::from_str(text).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.source, Some(PathBuf::from("/etc/facl/acl.txt")));
        assert_eq!(config.owner, OwnerIdentity::new(10, 20));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FaclConfig::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("[owner]"));
        assert!(!text.contains("source"));
        let back: FaclConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_load_explicit_missing() {
        let err = FaclConfig::load(Some("/nonexistent/facl/config.toml")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_explicit() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[owner]\nuid = 7\ngid = 8\n").unwrap();

        let config = FaclConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.owner, OwnerIdentity::new(7, 8));
    }

    #[test]
    fn test_load_malformed() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "owner = [").unwrap();

        let err = FaclConfig::load(Some(path.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = FaclConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }
}
