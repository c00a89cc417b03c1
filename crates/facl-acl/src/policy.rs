//! Inputs and outputs of permission resolution.
//!
//! [`OwnerIdentity`] says who owns the object the ACL protects. It is
//! configuration, not part of the ACL: the same entries can guard objects
//! with different owners.
//!
//! [`Resolution`] records how a request was decided: which category matched
//! and what effective permissions it carried.

use std::fmt;

use facl_core::{Id, Permissions};
use serde::{Deserialize, Serialize};

/// Default owning uid.
pub const DEFAULT_OWNER_UID: Id = 1000;

/// Default owning gid.
pub const DEFAULT_OWNER_GID: Id = 2000;

// ============================================================================
// OwnerIdentity
// ============================================================================

/// The uid/gid recorded as the protected object's owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct OwnerIdentity {
    /// Owning user id.
    pub uid: Id,
    /// Owning group id.
    pub gid: Id,
}

impl OwnerIdentity {
    /// Create an owner identity.
    pub fn new(uid: Id, gid: Id) -> Self {
        Self { uid, gid }
    }
}

impl Default for OwnerIdentity {
    fn default() -> Self {
        Self::new(DEFAULT_OWNER_UID, DEFAULT_OWNER_GID)
    }
}

// ============================================================================
// Category
// ============================================================================

/// The precedence step that decided a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Matched the owning-user entry.
    OwningUser,
    /// Matched a named-user entry.
    NamedUser,
    /// Granted through the owning-group entry.
    OwningGroup,
    /// Granted through a named-group entry.
    NamedGroup,
    /// Fell through to the other entry.
    Other,
    /// Nothing applied; denied by default.
    NoMatch,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OwningUser => "owning user",
            Self::NamedUser => "named user",
            Self::OwningGroup => "owning group",
            Self::NamedGroup => "named group",
            Self::Other => "other",
            Self::NoMatch => "no match",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Outcome of resolving one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Whether access is granted.
    pub granted: bool,
    /// The category that decided the request.
    pub category: Category,
    /// Effective permissions of that category, after any mask.
    ///
    /// Empty for [`Category::NoMatch`].
    pub effective: Permissions,
    /// The permissions that were asked for.
    pub requested: Permissions,
}

impl Resolution {
    pub(crate) fn decide(category: Category, effective: Permissions, requested: Permissions) -> Self {
        Self {
            granted: effective.satisfies(requested),
            category,
            effective,
            requested,
        }
    }

    pub(crate) fn no_match(requested: Permissions) -> Self {
        Self {
            granted: false,
            category: Category::NoMatch,
            effective: Permissions::empty(),
            requested,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.granted { "granted" } else { "denied" };
        write!(
            f,
            "{verdict} via {} (effective {}, requested {})",
            self.category, self.effective, self.requested
        )
    }
}
