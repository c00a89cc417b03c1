//! Loader and renderer working together.
//!
//! Entries parsed from source text must render with the same kind, id and
//! permission triad they were written with. Names are hashed to ids on the
//! way in, so the id side is compared against the derived id.

#![allow(clippy::unwrap_used)]

use facl_acl::{Acl, OwnerIdentity, evaluate, parse_source, render};
use facl_core::{EntryKind, Permissions, group_id_from_name, user_id_from_name};
use proptest::prelude::*;

fn triad() -> impl Strategy<Value = String> {
    ("[r-]", "[w-]", "[x-]").prop_map(|(r, w, x)| format!("{r}{w}{x}"))
}

fn source_line() -> impl Strategy<Value = (String, EntryKind, Option<i32>, String)> {
    let name = "[a-z]{1,8}";
    prop_oneof![
        triad().prop_map(|t| (format!("user::{t}"), EntryKind::OwningUser, None, t)),
        (name, triad()).prop_map(|(n, t)| {
            let id = user_id_from_name(&n);
            (format!("user:{n}:{t}"), EntryKind::NamedUser, Some(id), t)
        }),
        triad().prop_map(|t| (format!("group::{t}"), EntryKind::OwningGroup, None, t)),
        (name, triad()).prop_map(|(n, t)| {
            let id = group_id_from_name(&n);
            (format!("group:{n}:{t}"), EntryKind::NamedGroup, Some(id), t)
        }),
        triad().prop_map(|t| (format!("mask::{t}"), EntryKind::Mask, None, t)),
        triad().prop_map(|t| (format!("other::{t}"), EntryKind::Other, None, t)),
    ]
}

proptest! {
    #[test]
    fn test_rendered_entries_match_source(lines in prop::collection::vec(source_line(), 0..12)) {
        let text: String = lines.iter().map(|(line, ..)| format!("{line}\n")).collect();
        let acl = parse_source(&text);
        prop_assert_eq!(acl.len(), lines.len());

        let listing = render(&acl);
        let rendered: Vec<&str> = listing.lines().collect();
        prop_assert_eq!(rendered.len(), lines.len());

        for (index, ((_, kind, id, triad), row)) in lines.iter().zip(&rendered).enumerate() {
            let id = id.map_or_else(|| "N/A".to_string(), |id| id.to_string());
            let expected = format!("Entry {index}: Type={kind}, ID={id}, Permissions={triad}");
            prop_assert_eq!(*row, expected.as_str());
        }
    }
}

#[test]
fn test_loaded_file_drives_resolution() {
    let text = "\
user::rwx
user:alice:rw-
group::r--
group:devs:rw-
mask::r--
other::---
";
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("acl.txt");
    std::fs::write(&path, text).unwrap();

    let acl = Acl::load(&path).unwrap();
    let owner = OwnerIdentity::default();
    let alice = user_id_from_name("alice");
    let devs = group_id_from_name("devs");

    assert!(evaluate(&acl, owner, 1000, 0, Permissions::all()));
    // The mask caps alice at read.
    assert!(evaluate(&acl, owner, alice, 0, Permissions::READ));
    assert!(!evaluate(&acl, owner, alice, 0, Permissions::WRITE));
    assert!(evaluate(&acl, owner, 5000, devs, Permissions::READ));
    assert!(!evaluate(&acl, owner, 5000, devs, Permissions::WRITE));
    assert!(!evaluate(&acl, owner, 5000, 5000, Permissions::READ));
}

#[test]
fn test_released_acl_denies() {
    let mut acl = Acl::build_default();
    acl.release();
    assert_eq!(render(&acl), "");
    assert!(!evaluate(&acl, OwnerIdentity::default(), 1000, 2000, Permissions::empty()));
}
