// src/registry.rs

//! Append-only registry of watched paths.
//!
//! The registry is the single source of truth for the id -> path mapping.
//! The engine is the only writer; the signal-dump task holds a cloned handle
//! and reads snapshots concurrently. Entries are published under the lock
//! only once fully constructed, so a concurrent reader can never observe a
//! half-built entry. There is no removal operation.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Opaque correlator for one watched path.
///
/// Allocated by [`PathRegistry::append`] and attached to the kernel-side
/// registration; change events carry it back so the engine can recover the
/// path. Duplicate path texts get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(usize);

/// One file under observation. Immutable once created; the corresponding OS
/// watch handle lives in the watch backend for the process lifetime.
#[derive(Debug, Clone)]
pub struct WatchedPath {
    id: SourceId,
    path: PathBuf,
}

impl WatchedPath {
    pub fn id(&self) -> SourceId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Cheaply clonable handle to the shared path collection.
#[derive(Debug, Clone, Default)]
pub struct PathRegistry {
    inner: Arc<Mutex<Vec<WatchedPath>>>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a path and return its correlator. O(1); duplicate path texts
    /// are tracked as independent entries.
    pub fn append(&self, path: PathBuf) -> SourceId {
        let mut entries = self.inner.lock().unwrap();
        let id = SourceId(entries.len());
        entries.push(WatchedPath { id, path });
        id
    }

    /// Path for a previously appended id.
    pub fn resolve(&self, id: SourceId) -> Option<PathBuf> {
        let entries = self.inner.lock().unwrap();
        entries.get(id.0).map(|e| e.path.clone())
    }

    /// Snapshot of all watched paths, most recently added first. Used by the
    /// diagnostic dump.
    pub fn snapshot_newest_first(&self) -> Vec<PathBuf> {
        let entries = self.inner.lock().unwrap();
        entries.iter().rev().map(|e| e.path.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
