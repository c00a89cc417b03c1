//! Permission resolution.
//!
//! Requests are decided by an ordered cascade in which the first applicable
//! step terminates evaluation:
//!
//! 1. **Owning user**: the accessor's uid is the owner's uid and the ACL has
//!    an owning-user entry. That entry alone decides.
//! 2. **Named user**: a named-user entry matches the uid. Its bits, masked,
//!    decide.
//! 3. **Groups**: the owning-group entry (when the gid is the owner's gid)
//!    and then the first matching named-group entry are tried, each masked.
//!    Either can grant; if neither does, evaluation continues.
//! 4. **Other**: the other entry decides.
//! 5. Otherwise the request is denied.
//!
//! The mask is the first mask entry wherever it sits in the ACL. Without one,
//! masked categories carry no rights at all. A request is granted only when
//! the effective set contains every requested bit; the empty request is
//! granted by any step that applies.
//!
//! Resolution never fails and never modifies the ACL.

use facl_core::{AclEntry, EntryKind, Identity, Permissions};

use crate::policy::{Category, OwnerIdentity, Resolution};
use crate::store::Acl;

/// Evaluates requests against ACLs for a fixed owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    owner: OwnerIdentity,
}

impl Resolver {
    /// Create a resolver for objects owned by `owner`.
    pub fn new(owner: OwnerIdentity) -> Self {
        Self { owner }
    }

    /// The configured owner.
    pub fn owner(&self) -> OwnerIdentity {
        self.owner
    }

    /// Decide `requested` for `who`, returning the full resolution.
    pub fn resolve(&self, acl: &Acl, who: Identity, requested: Permissions) -> Resolution {
        let resolution = self.cascade(acl, who, requested);
        log::debug!("Access for {who} requesting {requested}: {resolution}");
        resolution
    }

    /// Decide `requested` for `who`.
    pub fn evaluate(&self, acl: &Acl, who: Identity, requested: Permissions) -> bool {
        self.resolve(acl, who, requested).granted
    }

    fn cascade(&self, acl: &Acl, who: Identity, requested: Permissions) -> Resolution {
        // 1. Owning user
        if who.uid == self.owner.uid
            && let Some(entry) = acl.first_of(EntryKind::OwningUser)
        {
            log::trace!("uid {} is the owner", who.uid);
            return Resolution::decide(Category::OwningUser, entry.permissions(), requested);
        }

        // 2. Named user
        if let Some(entry) = acl.named(EntryKind::NamedUser, who.uid) {
            log::trace!("uid {} has a named-user entry", who.uid);
            return Resolution::decide(Category::NamedUser, masked(acl, entry), requested);
        }

        // 3. Groups: owning group first, then named group
        let owning_group = if who.gid == self.owner.gid {
            acl.first_of(EntryKind::OwningGroup)
        } else {
            None
        };
        let named_group = acl.named(EntryKind::NamedGroup, who.gid);

        let group_paths = [
            (Category::OwningGroup, owning_group),
            (Category::NamedGroup, named_group),
        ];
        for (category, entry) in group_paths {
            let Some(entry) = entry else { continue };
            let effective = masked(acl, entry);
            if effective.satisfies(requested) {
                return Resolution::decide(category, effective, requested);
            }
            log::trace!(
                "gid {} via {category}: {effective} does not cover {requested}",
                who.gid
            );
        }

        // 4. Other
        if let Some(entry) = acl.first_of(EntryKind::Other) {
            return Resolution::decide(Category::Other, entry.permissions(), requested);
        }

        // 5. Default deny
        Resolution::no_match(requested)
    }
}

/// Effective bits of a masked entry.
fn masked(acl: &Acl, entry: &AclEntry) -> Permissions {
    entry.permissions() & acl.mask_bits()
}

/// Decide `requested` for `uid`/`gid` against `acl`, for objects owned by
/// `owner`.
///
/// # Examples
///
/// ```
/// use facl_acl::{evaluate, Acl, OwnerIdentity};
/// use facl_core::Permissions;
///
/// let acl = Acl::build_default();
/// let owner = OwnerIdentity::default();
///
/// assert!(evaluate(&acl, owner, 1000, 0, Permissions::RW));
/// assert!(!evaluate(&acl, owner, 1000, 0, Permissions::EXECUTE));
/// ```
pub fn evaluate(
    acl: &Acl,
    owner: OwnerIdentity,
    uid: facl_core::Id,
    gid: facl_core::Id,
    requested: Permissions,
) -> bool {
    Resolver::new(owner).evaluate(acl, Identity::new(uid, gid), requested)
}

/// Like [`evaluate`], returning the full [`Resolution`].
pub fn resolve(
    acl: &Acl,
    owner: OwnerIdentity,
    uid: facl_core::Id,
    gid: facl_core::Id,
    requested: Permissions,
) -> Resolution {
    Resolver::new(owner).resolve(acl, Identity::new(uid, gid), requested)
}

// ============================================================================
// Tests
// ============================================================================
