//! facl Core: shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all facl crates.
//! It has no internal facl dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`entry`]: ACL entries, entry kinds, and accessor identities
//! - [`error`]: Error types and Result alias
//! - [`perms`]: Read/write/execute permission bits
//! - [`util`]: Name to id utilities

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod entry;
pub mod error;
pub mod perms;
pub mod util;

// Re-export key types at crate root for convenience
pub use entry::{AclEntry, EntryKind, Id, Identity};
pub use error::{Error, Result};
pub use perms::Permissions;

// Convenience re-exports from util
pub use util::ids::{group_id_from_name, user_id_from_name};
