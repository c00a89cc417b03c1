//! ACL entries and the identities they are matched against.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::perms::Permissions;

/// Numeric user or group identifier.
///
/// Ids are never validated: negative or zero values are ordinary ids that
/// simply fail to match.
pub type Id = i32;

// ============================================================================
// EntryKind
// ============================================================================

/// The category an ACL entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// The object's owning user (`user::`).
    OwningUser,
    /// The object's owning group (`group::`).
    OwningGroup,
    /// Everyone not matched by another entry (`other::`).
    Other,
    /// A specific user by id (`user:<name>:`).
    NamedUser,
    /// A specific group by id (`group:<name>:`).
    NamedGroup,
    /// Upper bound on named-user, named-group and owning-group rights.
    Mask,
}

impl EntryKind {
    /// Returns `true` for kinds that carry a subject id.
    pub fn is_named(self) -> bool {
        matches!(self, Self::NamedUser | Self::NamedGroup)
    }

    /// Returns `true` for kinds whose rights are capped by the mask.
    pub fn is_masked(self) -> bool {
        matches!(self, Self::NamedUser | Self::NamedGroup | Self::OwningGroup)
    }

    /// Upper-case label used in listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::OwningUser => "USER_OWNER",
            Self::OwningGroup => "GROUP_OWNER",
            Self::Other => "OTHER",
            Self::NamedUser => "NAMED_USER",
            Self::NamedGroup => "NAMED_GROUP",
            Self::Mask => "MASK",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// AclEntry
// ============================================================================

/// One permission rule.
///
/// `subject_id` is only meaningful for [`EntryKind::NamedUser`] and
/// [`EntryKind::NamedGroup`]; the constructors keep it `None` for the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AclEntry {
    kind: EntryKind,
    subject_id: Option<Id>,
    permissions: Permissions,
}

impl AclEntry {
    /// The owning-user entry.
    pub fn owning_user(permissions: Permissions) -> Self {
        Self::unnamed(EntryKind::OwningUser, permissions)
    }

    /// The owning-group entry.
    pub fn owning_group(permissions: Permissions) -> Self {
        Self::unnamed(EntryKind::OwningGroup, permissions)
    }

    /// The other entry.
    pub fn other(permissions: Permissions) -> Self {
        Self::unnamed(EntryKind::Other, permissions)
    }

    /// The mask entry.
    pub fn mask(permissions: Permissions) -> Self {
        Self::unnamed(EntryKind::Mask, permissions)
    }

    /// A named-user entry for `uid`.
    pub fn named_user(uid: Id, permissions: Permissions) -> Self {
        Self {
            kind: EntryKind::NamedUser,
            subject_id: Some(uid),
            permissions,
        }
    }

    /// A named-group entry for `gid`.
    pub fn named_group(gid: Id, permissions: Permissions) -> Self {
        Self {
            kind: EntryKind::NamedGroup,
            subject_id: Some(gid),
            permissions,
        }
    }

    fn unnamed(kind: EntryKind, permissions: Permissions) -> Self {
        Self {
            kind,
            subject_id: None,
            permissions,
        }
    }

    /// The entry's category.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// The target uid/gid for named entries, `None` otherwise.
    pub fn subject_id(&self) -> Option<Id> {
        self.subject_id
    }

    /// The entry's nominal permission bits (before any mask).
    pub fn permissions(&self) -> Permissions {
        self.permissions
    }

    /// Returns `true` if this is a `kind` entry naming `id`.
    pub fn names(&self, kind: EntryKind, id: Id) -> bool {
        self.kind == kind && self.subject_id == Some(id)
    }
}

impl fmt::Display for AclEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type={}, ", self.kind)?;
        match self.subject_id {
            Some(id) => write!(f, "ID={id}, ")?,
            None => f.write_str("ID=N/A, ")?,
        }
        write!(f, "Permissions={}", self.permissions)
    }
}

// ============================================================================
// Identity
// ============================================================================

/// The effective identity of an accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    /// Effective user id.
    pub uid: Id,
    /// Effective group id.
    pub gid: Id,
}

impl Identity {
    /// Create an identity from a uid/gid pair.
    pub fn new(uid: Id, gid: Id) -> Self {
        Self { uid, gid }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "uid={} gid={}", self.uid, self.gid)
    }
}
