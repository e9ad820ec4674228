// tests/translator.rs

use notify::event::{
    CreateKind, DataChange, EventKind, MetadataKind, ModifyKind, RemoveKind, RenameMode,
};
use proptest::prelude::*;

use watchpipe::changes::ChangeSet;

#[test]
fn renders_kinds_in_fixed_order() {
    // Build the set in reverse order; rendering must still follow the
    // enumeration order, not insertion or bit order.
    let set = ChangeSet::RENAME | ChangeSet::DELETE | ChangeSet::WRITE;
    assert_eq!(set.describe(), "DELETE,WRITE,RENAME");
}

#[test]
fn renders_single_kind_without_separator() {
    assert_eq!(ChangeSet::ATTRIB.describe(), "ATTRIB");
}

#[test]
fn renders_empty_set_as_empty_string() {
    assert_eq!(ChangeSet::empty().describe(), "");
}

#[test]
fn renders_full_set_in_enumeration_order() {
    assert_eq!(
        ChangeSet::all().describe(),
        "DELETE,WRITE,EXTEND,ATTRIB,LINK,RENAME,REVOKE"
    );
}

#[test]
fn maps_notify_kinds_to_tracked_changes() {
    assert_eq!(
        ChangeSet::from_event_kind(&EventKind::Remove(RemoveKind::File)),
        ChangeSet::DELETE
    );
    assert_eq!(
        ChangeSet::from_event_kind(&EventKind::Modify(ModifyKind::Data(DataChange::Size))),
        ChangeSet::EXTEND
    );
    assert_eq!(
        ChangeSet::from_event_kind(&EventKind::Modify(ModifyKind::Data(DataChange::Content))),
        ChangeSet::WRITE
    );
    assert_eq!(
        ChangeSet::from_event_kind(&EventKind::Modify(ModifyKind::Data(DataChange::Any))),
        ChangeSet::WRITE
    );
    assert_eq!(
        ChangeSet::from_event_kind(&EventKind::Modify(ModifyKind::Metadata(
            MetadataKind::Permissions
        ))),
        ChangeSet::ATTRIB
    );
    assert_eq!(
        ChangeSet::from_event_kind(&EventKind::Modify(ModifyKind::Name(RenameMode::Any))),
        ChangeSet::RENAME
    );
}

#[test]
fn untracked_kinds_map_to_the_empty_set() {
    assert_eq!(
        ChangeSet::from_event_kind(&EventKind::Create(CreateKind::File)),
        ChangeSet::empty()
    );
    assert_eq!(ChangeSet::from_event_kind(&EventKind::Any), ChangeSet::empty());
}

proptest! {
    #[test]
    fn describe_is_idempotent_and_well_formed(bits in any::<u32>()) {
        let set = ChangeSet::from_bits_truncate(bits);

        let rendered = set.describe();
        prop_assert_eq!(&rendered, &set.describe());
        prop_assert!(!rendered.starts_with(','));
        prop_assert!(!rendered.ends_with(','));

        // Every rendered label is known, appears at most once, and labels
        // appear in strictly increasing enumeration order.
        let order = ["DELETE", "WRITE", "EXTEND", "ATTRIB", "LINK", "RENAME", "REVOKE"];
        let mut last: Option<usize> = None;
        for label in rendered.split(',').filter(|s| !s.is_empty()) {
            let idx = order
                .iter()
                .position(|o| o == &label)
                .expect("rendered label is a known kind");
            if let Some(prev) = last {
                prop_assert!(idx > prev);
            }
            last = Some(idx);
        }
    }
}
