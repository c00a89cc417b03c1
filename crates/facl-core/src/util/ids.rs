//! Name to id derivation.
//!
//! ACL source files name users and groups, but evaluation works on numeric
//! ids and there is no directory service behind this crate. Names are mapped
//! to ids with a base-31 polynomial hash folded into a fixed 100-id window:
//! users land in `1000..=1099`, groups in `2000..=2099`.
//!
//! The mapping is deterministic but collision-prone; two names that fold to
//! the same window slot share an id, and nothing detects it.

use crate::entry::Id;

/// First id of the named-user window.
pub const USER_ID_BASE: Id = 1000;

/// First id of the named-group window.
pub const GROUP_ID_BASE: Id = 2000;

/// Number of ids in each window.
pub const ID_WINDOW: Id = 100;

/// Base-31 polynomial hash over the bytes of `name`, with 32-bit wrapping.
///
/// Bytes are summed as signed values, so a byte of `0x80` or above
/// contributes a negative term. Names need not be valid UTF-8.
///
/// # Examples
///
/// ```
/// use facl_core::util::ids::name_hash;
///
/// assert_eq!(name_hash(""), 0);
/// assert_eq!(name_hash("a"), 97);
/// assert_eq!(name_hash("ab"), 97 * 31 + 98);
/// ```
pub fn name_hash(name: impl AsRef<[u8]>) -> i32 {
    name.as_ref().iter().fold(0i32, |acc, &b| {
        acc.wrapping_mul(31)
            .wrapping_add(i32::from(i8::from_ne_bytes([b])))
    })
}

/// Fold `name` into the 100-id window starting at `base`.
pub fn id_in_window(name: impl AsRef<[u8]>, base: Id) -> Id {
    base + name_hash(name).rem_euclid(ID_WINDOW)
}

/// Derive the uid for a named-user entry.
///
/// # Examples
///
/// ```
/// use facl_core::util::ids::user_id_from_name;
///
/// assert_eq!(user_id_from_name("a"), 1097);
/// ```
pub fn user_id_from_name(name: impl AsRef<[u8]>) -> Id {
    id_in_window(name, USER_ID_BASE)
}

/// Derive the gid for a named-group entry.
pub fn group_id_from_name(name: impl AsRef<[u8]>) -> Id {
    id_in_window(name, GROUP_ID_BASE)
}
