//! ACL source text.
//!
//! The source format is line oriented, one entry per line, with three
//! colon-separated fields:
//!
//! ```text
//! user::rw-
//! user:alice:rw-
//! group::r--
//! group:devs:r-x
//! mask::rw-
//! other::---
//! ```
//!
//! An empty name on a `user` or `group` line means the owning user or group.
//! A non-empty name becomes a named entry whose id is derived from the name
//! (see [`facl_core::util::ids`]). The second field of `mask` and `other`
//! lines is ignored.
//!
//! Parsing is lenient: blank lines, lines with an unknown leading token, and
//! lines with fewer than three fields are skipped. Only failing to read the
//! source is an error.

use std::path::Path;

use facl_core::{AclEntry, Error, Permissions, Result, group_id_from_name, user_id_from_name};

use crate::store::Acl;

/// Parse source text into an ACL, preserving line order.
///
/// # Examples
///
/// ```
/// use facl_acl::loader::parse_source;
/// use facl_core::{EntryKind, Permissions};
///
/// let acl = parse_source("user::rw-\nbogus line\n\nother::r--\n");
/// assert_eq!(acl.len(), 2);
/// assert_eq!(acl.entries()[0].kind(), EntryKind::OwningUser);
/// assert_eq!(acl.entries()[1].permissions(), Permissions::READ);
/// ```
pub fn parse_source(text: &str) -> Acl {
    parse_bytes(text.as_bytes())
}

/// Parse raw source bytes into an ACL, preserving line order.
///
/// The source need not be valid UTF-8. Names are hashed byte for byte.
pub fn parse_bytes(source: &[u8]) -> Acl {
    source
        .split(|&b| b == b'\n')
        .enumerate()
        .filter_map(|(index, line)| {
            let entry = parse_line_bytes(line);
            if entry.is_none() && !is_blank(line) {
                log::debug!(
                    "Skipping ACL source line {}: {:?}",
                    index + 1,
                    String::from_utf8_lossy(line)
                );
            }
            entry
        })
        .collect()
}

/// Parse one source line, or `None` if it does not describe an entry.
pub fn parse_line(line: &str) -> Option<AclEntry> {
    parse_line_bytes(line.as_bytes())
}

/// Parse one raw source line, or `None` if it does not describe an entry.
pub fn parse_line_bytes(line: &[u8]) -> Option<AclEntry> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if is_blank(line) {
        return None;
    }

    let mut fields = line.split(|&b| b == b':');
    let tag = fields.next()?;
    let name = fields.next()?;
    let perms = Permissions::from_triad(&String::from_utf8_lossy(fields.next()?));

    let entry = match (tag, name.is_empty()) {
        (b"user", true) => AclEntry::owning_user(perms),
        (b"user", false) => AclEntry::named_user(user_id_from_name(name), perms),
        (b"group", true) => AclEntry::owning_group(perms),
        (b"group", false) => AclEntry::named_group(group_id_from_name(name), perms),
        (b"mask", _) => AclEntry::mask(perms),
        (b"other", _) => AclEntry::other(perms),
        _ => return None,
    };
    Some(entry)
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Read and parse the ACL source at `path`.
///
/// Returns [`Error::SourceUnavailable`] if the file cannot be opened or read;
/// no partial ACL is produced in that case. Content that is not valid UTF-8
/// is not a read failure.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Acl> {
    let path = path.as_ref();
    let source = std::fs::read(path).map_err(|e| Error::source_unavailable(e, path))?;
    let acl = parse_bytes(&source);
    log::info!("Loaded {} ACL entries from {}", acl.len(), path.display());
    Ok(acl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use facl_core::EntryKind;
    use std::io::Write;

    fn single(line: &str) -> AclEntry {
        parse_line(line).unwrap()
    }

    // ------------------------------------------------------------------------
    // parse_line tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_owning_user() {
        let entry = single("user::rw-");
        assert_eq!(entry.kind(), EntryKind::OwningUser);
        assert_eq!(entry.subject_id(), None);
        assert_eq!(entry.permissions(), Permissions::RW);
    }

    #[test]
    fn test_named_user() {
        let entry = single("user:bob:r--");
        assert_eq!(entry.kind(), EntryKind::NamedUser);
        assert_eq!(entry.subject_id(), Some(1017));
        assert_eq!(entry.permissions(), Permissions::READ);
    }

    #[test]
    fn test_owning_group() {
        let entry = single("group::r-x");
        assert_eq!(entry.kind(), EntryKind::OwningGroup);
        assert_eq!(entry.permissions(), Permissions::READ | Permissions::EXECUTE);
    }

    #[test]
    fn test_named_group() {
        let entry = single("group:bob:rwx");
        assert_eq!(entry.kind(), EntryKind::NamedGroup);
        assert_eq!(entry.subject_id(), Some(2017));
        assert_eq!(entry.permissions(), Permissions::all());
    }

    #[test]
    fn test_mask_and_other() {
        assert_eq!(single("mask::rw-"), AclEntry::mask(Permissions::RW));
        assert_eq!(single("other::---"), AclEntry::other(Permissions::empty()));
    }

    #[test]
    fn test_mask_name_field_ignored() {
        assert_eq!(single("mask:anything:r--"), AclEntry::mask(Permissions::READ));
    }

    #[test]
    fn test_short_triad() {
        assert_eq!(single("other::r"), AclEntry::other(Permissions::READ));
        assert_eq!(single("other::"), AclEntry::other(Permissions::empty()));
    }

    #[test]
    fn test_unknown_tag_skipped() {
        assert!(parse_line("default:user::rwx").is_none());
        assert!(parse_line("USER::rwx").is_none());
    }

    #[test]
    fn test_missing_fields_skipped() {
        assert!(parse_line("user").is_none());
        assert!(parse_line("user:alice").is_none());
        assert!(parse_line("mask:").is_none());
    }

    #[test]
    fn test_extra_fields_ignored() {
        assert_eq!(single("other::r--:extra"), AclEntry::other(Permissions::READ));
    }

    #[test]
    fn test_crlf() {
        assert_eq!(single("other::rwx\r"), AclEntry::other(Permissions::all()));
    }

    #[test]
    fn test_blank() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   ").is_none());
        assert!(parse_line("\r").is_none());
    }

    // ------------------------------------------------------------------------
    // parse_source tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_parse_source_keeps_order() {
        let text = "user::rw-\nuser:alice:rw-\ngroup::r--\nmask::rw-\nother::---\n";
        let acl = parse_source(text);
        let kinds: Vec<EntryKind> = acl.iter().map(AclEntry::kind).collect();
        assert_eq!(
            kinds,
            vec![
                EntryKind::OwningUser,
                EntryKind::NamedUser,
                EntryKind::OwningGroup,
                EntryKind::Mask,
                EntryKind::Other,
            ]
        );
    }

    #[test]
    fn test_parse_source_skips_noise() {
        let text = "\n# comment\nuser::rw-\n\n\nnonsense\nother::r--";
        let acl = parse_source(text);
        assert_eq!(acl.len(), 2);
    }

    #[test]
    fn test_parse_source_empty() {
        assert!(parse_source("").is_empty());
    }

    // ------------------------------------------------------------------------
    // load_from_path tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "user::rwx\ngroup:devs:r--\nmask::r--\nother::---\n").unwrap();

        let acl = load_from_path(file.path()).unwrap();
        assert_eq!(acl.len(), 4);
        assert_eq!(acl.entries()[1].subject_id(), Some(group_id_from_name("devs")));
    }

    #[test]
    fn test_load_keeps_lines_around_non_utf8_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"user::rw-\nuser:jos\xe9:r--\nother::r--\n")
            .unwrap();

        let acl = load_from_path(file.path()).unwrap();
        assert_eq!(acl.len(), 3);
        assert_eq!(acl.entries()[0].kind(), EntryKind::OwningUser);
        assert_eq!(acl.entries()[1].kind(), EntryKind::NamedUser);
        assert_eq!(acl.entries()[1].subject_id(), Some(1059));
        assert_eq!(acl.entries()[1].permissions(), Permissions::READ);
        assert_eq!(acl.entries()[2].kind(), EntryKind::Other);
    }

    #[test]
    fn test_parse_bytes_skips_garbled_line() {
        let acl = parse_bytes(b"user::rwx\n\xff\xfe:\x80\nmask::r--\n");
        assert_eq!(acl.len(), 2);
        assert_eq!(acl.entries()[1].kind(), EntryKind::Mask);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("acl.txt");
        let err = load_from_path(&path).unwrap_err();
        assert!(err.is_source_unavailable());
        assert!(err.to_string().contains("acl.txt"));
    }

    #[test]
    fn test_load_directory_is_unavailable() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_from_path(dir.path()).unwrap_err();
        assert!(err.is_source_unavailable());
    }
}
