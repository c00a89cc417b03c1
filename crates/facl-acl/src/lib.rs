//! # facl-acl
//!
//! POSIX-style access control lists for facl.
//!
//! This crate implements the ACL model on top of `facl-core`:
//! - ACL storage and shared, swappable ACL handles ([`store`])
//! - Owner identity and resolution results ([`policy`])
//! - The permission-resolution cascade ([`enforcement`])
//! - The line-oriented ACL source format ([`loader`])
//! - Human-readable listings ([`render`])
//!
//! ```
//! use facl_acl::{Acl, OwnerIdentity, Resolver};
//! use facl_core::{Identity, Permissions};
//!
//! let acl = Acl::build_default();
//! let resolver = Resolver::new(OwnerIdentity::default());
//!
//! // Named group 2001 is read-only.
//! assert!(resolver.evaluate(&acl, Identity::new(9999, 2001), Permissions::READ));
//! assert!(!resolver.evaluate(&acl, Identity::new(9999, 2001), Permissions::WRITE));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod enforcement;
pub mod loader;
pub mod policy;
pub mod render;
pub mod store;

pub use enforcement::{Resolver, evaluate, resolve};
pub use loader::{load_from_path, parse_bytes, parse_source};
pub use policy::{Category, OwnerIdentity, Resolution};
pub use render::render;
pub use store::{Acl, SharedAcl};

pub use facl_core::{Error, Result};
