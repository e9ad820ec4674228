// src/watch/backend.rs

//! Pluggable watch backend abstraction.
//!
//! The engine talks to a [`WatchBackend`] instead of the `notify` API
//! directly. This makes it easy to swap in a fake backend in tests while
//! keeping the production implementation here.

use std::path::Path;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::changes::ChangeSet;
use crate::engine::EngineEvent;
use crate::errors::{Result, WatchpipeError};
use crate::registry::SourceId;

/// Trait abstracting how paths are armed for change notification.
///
/// Production code uses [`NotifyBackend`]; tests can provide their own
/// implementation that records registrations and injects change events.
pub trait WatchBackend {
    /// Open `path` for event-only observation and arm an edge-triggered,
    /// auto-rearming watch for `kinds`, correlated by `id`.
    ///
    /// Failure is fatal to the caller: either the path couldn't be opened,
    /// or the kernel rejected the registration.
    fn register(&mut self, path: &Path, id: SourceId, kinds: ChangeSet) -> Result<()>;
}

/// Real watch backend over the `notify` crate.
///
/// Each registered path gets its own watcher instance. That keeps duplicate
/// path texts fully independent (each occurrence reports separately) and
/// gives every registry entry an exclusively owned OS handle. Handles are
/// retained here for the backend's lifetime; dropping one would cancel its
/// registration.
pub struct NotifyBackend {
    event_tx: mpsc::UnboundedSender<EngineEvent>,
    watchers: Vec<RecommendedWatcher>,
}

impl NotifyBackend {
    pub fn new(event_tx: mpsc::UnboundedSender<EngineEvent>) -> Self {
        Self {
            event_tx,
            watchers: Vec::new(),
        }
    }

    /// Number of live registrations.
    pub fn watch_count(&self) -> usize {
        self.watchers.len()
    }
}

impl WatchBackend for NotifyBackend {
    fn register(&mut self, path: &Path, id: SourceId, kinds: ChangeSet) -> Result<()> {
        let tx = self.event_tx.clone();

        // Closure called synchronously by notify whenever an event arrives.
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let changes = ChangeSet::from_event_kind(&event.kind) & kinds;
                    if changes.is_empty() {
                        return;
                    }
                    if tx.send(EngineEvent::PathChanged { id, changes }).is_err() {
                        // Engine is gone; nothing useful left to do here.
                        eprintln!("watchpipe: failed to forward change event");
                    }
                }
                Err(err) => {
                    eprintln!("watchpipe: file watch error: {err}");
                }
            },
            Config::default(),
        )
        .map_err(|err| classify(err, path))?;

        watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|err| classify(err, path))?;

        self.watchers.push(watcher);
        Ok(())
    }
}

/// Split registration failures into the open-vs-monitor taxonomy: a missing
/// or inaccessible path is an open failure, anything else a rejection of
/// the watch itself.
fn classify(err: notify::Error, path: &Path) -> WatchpipeError {
    let open_failure = match &err.kind {
        notify::ErrorKind::PathNotFound => true,
        notify::ErrorKind::Io(io) => matches!(
            io.kind(),
            std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied
        ),
        _ => false,
    };

    if open_failure {
        WatchpipeError::Open {
            path: path.to_path_buf(),
            source: err,
        }
    } else {
        WatchpipeError::Register {
            path: path.to_path_buf(),
            source: err,
        }
    }
}
