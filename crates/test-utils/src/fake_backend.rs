use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;

use watchpipe::changes::ChangeSet;
use watchpipe::errors::Result;
use watchpipe::registry::SourceId;
use watchpipe::watch::WatchBackend;

/// Registrations recorded by a [`FakeBackend`], shared with the test body.
pub type Registered = Arc<Mutex<Vec<(PathBuf, SourceId)>>>;

/// A fake watch backend that:
/// - records every registration (path + correlator)
/// - fails registration for paths marked unopenable, the way a missing file
///   would.
///
/// Change events are injected by the test sending
/// `EngineEvent::PathChanged` on the engine channel with a recorded id.
pub struct FakeBackend {
    registered: Registered,
    unopenable: Vec<PathBuf>,
}

impl FakeBackend {
    pub fn new(registered: Registered) -> Self {
        Self {
            registered,
            unopenable: Vec::new(),
        }
    }

    /// Mark a path as unopenable: registering it will fail.
    pub fn with_unopenable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unopenable.push(path.into());
        self
    }
}

impl WatchBackend for FakeBackend {
    fn register(&mut self, path: &Path, id: SourceId, _kinds: ChangeSet) -> Result<()> {
        if self.unopenable.iter().any(|p| p == path) {
            return Err(anyhow!("couldn't open {}", path.display()).into());
        }

        let mut guard = self.registered.lock().unwrap();
        guard.push((path.to_path_buf(), id));
        Ok(())
    }
}
