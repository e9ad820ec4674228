// tests/registry.rs

use std::path::PathBuf;
use std::thread;

use watchpipe::registry::PathRegistry;

#[test]
fn append_returns_distinct_ids_for_duplicate_paths() {
    let registry = PathRegistry::new();

    let a = registry.append(PathBuf::from("/tmp/same"));
    let b = registry.append(PathBuf::from("/tmp/same"));

    assert_ne!(a, b);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.resolve(a), Some(PathBuf::from("/tmp/same")));
    assert_eq!(registry.resolve(b), Some(PathBuf::from("/tmp/same")));
}

#[test]
fn snapshot_is_newest_first() {
    let registry = PathRegistry::new();
    registry.append(PathBuf::from("/one"));
    registry.append(PathBuf::from("/two"));
    registry.append(PathBuf::from("/three"));

    let snap = registry.snapshot_newest_first();
    assert_eq!(
        snap,
        vec![
            PathBuf::from("/three"),
            PathBuf::from("/two"),
            PathBuf::from("/one"),
        ]
    );
}

#[test]
fn concurrent_snapshots_never_observe_torn_entries() {
    let registry = PathRegistry::new();

    let writer = {
        let registry = registry.clone();
        thread::spawn(move || {
            for i in 0..1000 {
                registry.append(PathBuf::from(format!("/watched/{i}")));
            }
        })
    };

    // The reader mimics the signal-dump path: every observed entry must be
    // fully formed and the snapshot must reflect insertion order exactly.
    for _ in 0..200 {
        let snap = registry.snapshot_newest_first();
        let len = snap.len();
        for (offset, path) in snap.iter().enumerate() {
            let expected = PathBuf::from(format!("/watched/{}", len - 1 - offset));
            assert_eq!(path, &expected);
        }
    }

    writer.join().unwrap();
    assert_eq!(registry.len(), 1000);
}
