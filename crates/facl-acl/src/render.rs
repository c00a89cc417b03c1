//! Human-readable ACL listings.
//!
//! One line per entry, in evaluation order:
//!
//! ```text
//! Entry 0: Type=USER_OWNER, ID=N/A, Permissions=rw-
//! Entry 1: Type=NAMED_USER, ID=1001, Permissions=rw-
//! ```

use std::fmt;

use crate::store::Acl;

/// Render `acl` as a listing, one newline-terminated line per entry.
pub fn render(acl: &Acl) -> String {
    acl.to_string()
}

pub(crate) fn write_listing(f: &mut fmt::Formatter<'_>, acl: &Acl) -> fmt::Result {
    for (index, entry) in acl.iter().enumerate() {
        writeln!(f, "Entry {index}: {entry}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_source;

    #[test]
    fn test_render_default() {
        let expected = "\
Entry 0: Type=USER_OWNER, ID=N/A, Permissions=rw-
Entry 1: Type=NAMED_USER, ID=1001, Permissions=rw-
Entry 2: Type=NAMED_USER, ID=1002, Permissions=r--
Entry 3: Type=GROUP_OWNER, ID=N/A, Permissions=rw-
Entry 4: Type=NAMED_GROUP, ID=2001, Permissions=r--
Entry 5: Type=NAMED_GROUP, ID=2002, Permissions=r--
Entry 6: Type=MASK, ID=N/A, Permissions=rw-
Entry 7: Type=OTHER, ID=N/A, Permissions=---
";
        assert_eq!(render(&Acl::build_default()), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&Acl::new()), "");
    }

    #[test]
    fn test_render_loaded_source() {
        let acl = parse_source("user::rwx\nuser:bob:r-x\nmask::r--\nother::--x\n");
        let listing = render(&acl);
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Entry 0: Type=USER_OWNER, ID=N/A, Permissions=rwx",
                "Entry 1: Type=NAMED_USER, ID=1017, Permissions=r-x",
                "Entry 2: Type=MASK, ID=N/A, Permissions=r--",
                "Entry 3: Type=OTHER, ID=N/A, Permissions=--x",
            ]
        );
    }

    #[test]
    fn test_render_matches_display() {
        let acl = Acl::build_default();
        assert_eq!(render(&acl), format!("{acl}"));
    }
}
