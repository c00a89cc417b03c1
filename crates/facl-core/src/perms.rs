//! Read/write/execute permission bits.
//!
//! [`Permissions`] is a 3-flag bitmask using the conventional octal triad
//! values (`r` = 4, `w` = 2, `x` = 1). Two textual forms are supported:
//!
//! - the positional *triad* (`"rw-"`), used by ACL source files and listings
//! - the free-form *request* (`"wr"`, `"x"`), used when asking for access

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

bitflags! {
    /// A set of {Read, Write, Execute}.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Permissions: u8 {
        /// Read access (`r`).
        const READ = 0b100;
        /// Write access (`w`).
        const WRITE = 0b010;
        /// Execute access (`x`).
        const EXECUTE = 0b001;
    }
}

/// Triad positions in display order.
const TRIAD: [(Permissions, char); 3] = [
    (Permissions::READ, 'r'),
    (Permissions::WRITE, 'w'),
    (Permissions::EXECUTE, 'x'),
];

impl Permissions {
    /// Read and write, the most common grant in the default fixture.
    pub const RW: Self = Self::READ.union(Self::WRITE);

    /// Parse a positional triad such as `"rw-"` or `"r-x"`.
    ///
    /// Position 0, 1 and 2 set Read, Write and Execute when the character is
    /// exactly `r`, `w` and `x`. Any other character leaves that flag unset,
    /// and a string shorter than three characters simply yields fewer flags.
    /// Characters past the third are ignored. This never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use facl_core::Permissions;
    ///
    /// assert_eq!(Permissions::from_triad("rw-"), Permissions::RW);
    /// assert_eq!(Permissions::from_triad("r?x"), Permissions::READ | Permissions::EXECUTE);
    /// assert_eq!(Permissions::from_triad("-w"), Permissions::WRITE);
    /// assert_eq!(Permissions::from_triad("xwr"), Permissions::WRITE);
    /// ```
    pub fn from_triad(triad: &str) -> Self {
        triad
            .chars()
            .zip(TRIAD)
            .filter(|(c, (_, expected))| c == expected)
            .fold(Self::empty(), |acc, (_, (flag, _))| acc | flag)
    }

    /// Render as a fixed 3-character positional triad (`"rw-"`).
    pub fn to_triad(self) -> String {
        TRIAD
            .iter()
            .map(|(flag, c)| if self.contains(*flag) { *c } else { '-' })
            .collect()
    }

    /// Parse a requested permission string such as `"rw"` or `"xr"`.
    ///
    /// Order does not matter: each of `r`, `w`, `x` present anywhere in the
    /// string requests that flag. `-` is accepted as filler so that triads
    /// are valid requests too. Any other character is rejected, and so is an
    /// empty string; use [`Permissions::empty`] to ask for nothing.
    pub fn from_request(request: &str) -> crate::Result<Self> {
        if request.is_empty() {
            return Err(Error::invalid_argument("permission request is empty"));
        }
        request.chars().try_fold(Self::empty(), |acc, c| match c {
            'r' => Ok(acc | Self::READ),
            'w' => Ok(acc | Self::WRITE),
            'x' => Ok(acc | Self::EXECUTE),
            '-' => Ok(acc),
            other => Err(Error::invalid_argument(format!(
                "invalid permission character '{other}' in '{request}' (expected r, w, x or -)"
            ))),
        })
    }

    /// Returns `true` when every bit of `requested` is present in `self`.
    ///
    /// This is the grant test applied at every step of resolution. The empty
    /// request is satisfied by any set, including the empty one.
    pub fn satisfies(self, requested: Self) -> bool {
        self.contains(requested)
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_triad())
    }
}

impl FromStr for Permissions {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::from_request(s)
    }
}

impl Serialize for Permissions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_triad())
    }
}

impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let triad = String::deserialize(deserializer)?;
        Ok(Self::from_triad(&triad))
    }
}
