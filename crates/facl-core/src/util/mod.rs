//! Utility modules.
//!
//! # Modules
//!
//! - [`ids`]: Name to uid/gid derivation for ACL source files

pub mod ids;
