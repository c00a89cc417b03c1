//! ACL storage.
//!
//! [`Acl`] is an ordered, owned sequence of [`AclEntry`] values. Order is
//! significant: every lookup returns the first matching entry, so duplicate
//! entries resolve deterministically.
//!
//! [`SharedAcl`] wraps an optional `Acl` for long-lived use. Readers take an
//! `Arc` snapshot and evaluate against it without holding the lock; writers
//! swap in a whole new `Acl`, never editing one in place.

use std::fmt;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use facl_core::{AclEntry, EntryKind, Id, Permissions, Result};

// ============================================================================
// Acl
// ============================================================================

/// An ordered sequence of ACL entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Acl {
    entries: Vec<AclEntry>,
}

impl Acl {
    /// Create an empty ACL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ACL from entries in evaluation order.
    pub fn from_entries(entries: Vec<AclEntry>) -> Self {
        Self { entries }
    }

    /// The fixed demonstration ACL.
    ///
    /// | # | kind        | id   | perms |
    /// |---|-------------|------|-------|
    /// | 0 | OwningUser  |      | `rw-` |
    /// | 1 | NamedUser   | 1001 | `rw-` |
    /// | 2 | NamedUser   | 1002 | `r--` |
    /// | 3 | OwningGroup |      | `rw-` |
    /// | 4 | NamedGroup  | 2001 | `r--` |
    /// | 5 | NamedGroup  | 2002 | `r--` |
    /// | 6 | Mask        |      | `rw-` |
    /// | 7 | Other       |      | `---` |
    ///
    /// This is a fixture for standalone use and tests, not a policy.
    pub fn build_default() -> Self {
        Self::from_entries(vec![
            AclEntry::owning_user(Permissions::RW),
            AclEntry::named_user(1001, Permissions::RW),
            AclEntry::named_user(1002, Permissions::READ),
            AclEntry::owning_group(Permissions::RW),
            AclEntry::named_group(2001, Permissions::READ),
            AclEntry::named_group(2002, Permissions::READ),
            AclEntry::mask(Permissions::RW),
            AclEntry::other(Permissions::empty()),
        ])
    }

    /// Parse an ACL from source text. See [`crate::loader`].
    ///
    /// # Examples
    ///
    /// ```
    /// use facl_acl::Acl;
    /// use facl_core::{EntryKind, Permissions};
    ///
    /// let acl = Acl::parse("user::rw-\nmask::r--\n");
    /// assert_eq!(acl.len(), 2);
    /// assert_eq!(acl.mask_bits(), Permissions::READ);
    /// assert!(acl.first_of(EntryKind::OwningUser).is_some());
    /// ```
    pub fn parse(text: &str) -> Self {
        crate::loader::parse_source(text)
    }

    /// Load an ACL from a source file. See [`crate::loader`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        crate::loader::load_from_path(path)
    }

    /// Append an entry at the end of the evaluation order.
    pub fn push(&mut self, entry: AclEntry) {
        self.entries.push(entry);
    }

    /// Drop all entries and free their storage.
    ///
    /// Safe to call any number of times; afterwards the ACL is empty.
    pub fn release(&mut self) {
        if !self.entries.is_empty() {
            log::debug!("Releasing ACL with {} entries", self.entries.len());
        }
        self.entries = Vec::new();
    }

    /// Entries in evaluation order.
    pub fn entries(&self) -> &[AclEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Alias for [`Acl::len`].
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, AclEntry> {
        self.entries.iter()
    }

    /// First entry of `kind`, if any.
    pub fn first_of(&self, kind: EntryKind) -> Option<&AclEntry> {
        self.entries.iter().find(|e| e.kind() == kind)
    }

    /// First `kind` entry naming `id`, if any.
    pub fn named(&self, kind: EntryKind, id: Id) -> Option<&AclEntry> {
        self.entries.iter().find(|e| e.names(kind, id))
    }

    /// Bits of the first mask entry, or the empty set if there is none.
    ///
    /// An ACL without a mask therefore grants nothing through masked
    /// categories.
    pub fn mask_bits(&self) -> Permissions {
        self.first_of(EntryKind::Mask)
            .map(AclEntry::permissions)
            .unwrap_or_else(Permissions::empty)
    }
}

impl FromIterator<AclEntry> for Acl {
    fn from_iter<I: IntoIterator<Item = AclEntry>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Acl {
    type Item = &'a AclEntry;
    type IntoIter = std::slice::Iter<'a, AclEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Acl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::render::write_listing(f, self)
    }
}

// ============================================================================
// SharedAcl
// ============================================================================

/// Thread-safe holder for the current ACL.
///
/// Cheap to clone (Arc internals). Starts unset; [`SharedAcl::snapshot`]
/// returns `None` until an ACL is installed.
#[derive(Clone, Default)]
pub struct SharedAcl {
    inner: Arc<RwLock<Option<Arc<Acl>>>>,
}

impl SharedAcl {
    /// Create an unset store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `acl`.
    pub fn with_acl(acl: Acl) -> Self {
        let shared = Self::new();
        shared.replace(acl);
        shared
    }

    /// The current ACL, or `None` if unset.
    ///
    /// The snapshot stays valid after later swaps.
    pub fn snapshot(&self) -> Option<Arc<Acl>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns `true` if an ACL is installed.
    pub fn is_set(&self) -> bool {
        self.snapshot().is_some()
    }

    /// Install `acl`, returning the previous one.
    pub fn replace(&self, acl: Acl) -> Option<Arc<Acl>> {
        let next = Arc::new(acl);
        log::info!("Installing ACL with {} entries", next.len());
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(next)
    }

    /// Load `path` and swap it in.
    ///
    /// Parsing happens before the lock is taken. On failure the current
    /// contents are left untouched and the error is returned.
    pub fn reload_from_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        match crate::loader::load_from_path(path) {
            Ok(acl) => {
                self.replace(acl);
                Ok(())
            }
            Err(e) => {
                log::warn!("Keeping current ACL, reload failed: {e}");
                Err(e)
            }
        }
    }

    /// Unset the store. Idempotent.
    pub fn release(&self) {
        let previous = self
            .inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            log::debug!("Shared ACL released");
        }
    }
}

impl fmt::Debug for SharedAcl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedAcl")
            .field("entries", &self.snapshot().map(|acl| acl.len()))
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
