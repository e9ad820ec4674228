// src/changes.rs

//! The set of tracked change kinds and its stable textual rendering.

use bitflags::bitflags;
use notify::event::{DataChange, EventKind, ModifyKind};

bitflags! {
    /// File-change kinds a watch tracks and reports.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ChangeSet: u32 {
        const DELETE = 1 << 0;
        const WRITE  = 1 << 1;
        const EXTEND = 1 << 2;
        const ATTRIB = 1 << 3;
        const LINK   = 1 << 4;
        const RENAME = 1 << 5;
        const REVOKE = 1 << 6;
    }
}

/// Label table in rendering order. [`ChangeSet::describe`] walks this table,
/// never the bit order of the underlying mask.
const LABELS: &[(ChangeSet, &str)] = &[
    (ChangeSet::DELETE, "DELETE"),
    (ChangeSet::WRITE, "WRITE"),
    (ChangeSet::EXTEND, "EXTEND"),
    (ChangeSet::ATTRIB, "ATTRIB"),
    (ChangeSet::LINK, "LINK"),
    (ChangeSet::RENAME, "RENAME"),
    (ChangeSet::REVOKE, "REVOKE"),
];

impl ChangeSet {
    /// Comma-joined labels of the kinds present, in table order, with no
    /// trailing separator. An empty set renders as the empty string.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for (flag, name) in LABELS {
            if self.contains(*flag) {
                if !out.is_empty() {
                    out.push(',');
                }
                out.push_str(name);
            }
        }
        out
    }

    /// Map a `notify` event kind onto the tracked change kinds.
    ///
    /// Kinds with no tracked counterpart (creation, access) map to the empty
    /// set and are filtered out before dispatch. LINK and REVOKE have no
    /// portable source in the notification taxonomy; on inotify platforms a
    /// link-count change surfaces as a metadata event and lands in ATTRIB.
    pub fn from_event_kind(kind: &EventKind) -> ChangeSet {
        match kind {
            EventKind::Remove(_) => ChangeSet::DELETE,
            EventKind::Modify(ModifyKind::Data(DataChange::Size)) => ChangeSet::EXTEND,
            EventKind::Modify(ModifyKind::Data(_)) => ChangeSet::WRITE,
            EventKind::Modify(ModifyKind::Metadata(_)) => ChangeSet::ATTRIB,
            EventKind::Modify(ModifyKind::Name(_)) => ChangeSet::RENAME,
            // Backends that can't classify a modification still report one.
            EventKind::Modify(ModifyKind::Any | ModifyKind::Other) => ChangeSet::WRITE,
            _ => ChangeSet::empty(),
        }
    }
}
