// src/engine/runtime.rs

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::changes::ChangeSet;
use crate::errors::{Result, WatchpipeError};
use crate::registry::{PathRegistry, SourceId};
use crate::watch::WatchBackend;

use super::EngineEvent;
use super::intake::{InputStream, take_lines};

/// Drives the watch loop: consumes [`EngineEvent`]s, registers newly
/// arrived paths through a [`WatchBackend`], and reports changes on the
/// output writer.
///
/// This is the IO shell around the pure intake logic in
/// [`intake`](super::intake); it only handles channel IO and dispatch order.
pub struct Engine<B: WatchBackend, W: Write> {
    registry: PathRegistry,
    backend: B,
    input: InputStream,
    event_rx: mpsc::UnboundedReceiver<EngineEvent>,
    out: W,
}

impl<B: WatchBackend, W: Write> fmt::Debug for Engine<B, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl<B: WatchBackend, W: Write> Engine<B, W> {
    pub fn new(
        registry: PathRegistry,
        backend: B,
        event_rx: mpsc::UnboundedReceiver<EngineEvent>,
        out: W,
    ) -> Self {
        Self {
            registry,
            backend,
            input: InputStream::new(),
            event_rx,
            out,
        }
    }

    /// Main event loop.
    ///
    /// Processes exactly one event per iteration, in arrival order. There is
    /// no graceful shutdown: the loop runs until the process is killed or a
    /// fatal error occurs, and every error path out of here is fatal.
    pub async fn run(mut self) -> Result<()> {
        info!("watchpipe engine started");

        loop {
            let event = match self.event_rx.recv().await {
                Some(e) => e,
                // Unreachable by construction: the backend holds a sender
                // for the engine's lifetime. Fatal rather than a normal
                // exit.
                None => return Err(WatchpipeError::ChannelClosed),
            };

            debug!(?event, "engine received event");

            match event {
                EngineEvent::Input { data, eof } => self.handle_input(&data, eof)?,
                EngineEvent::PathChanged { id, changes } => self.emit_change(id, changes)?,
                EngineEvent::InputFailed(err) => return Err(WatchpipeError::InputRead(err)),
            }
        }
    }

    /// Path intake for one input-readability event: drain the available
    /// lines and arm a watch for each.
    fn handle_input(&mut self, data: &[u8], eof: bool) -> Result<()> {
        self.input.feed(data);
        if eof {
            self.input.mark_eof();
            debug!("input stream reached end-of-file");
        }

        for line in take_lines(&mut self.input, data.len(), eof) {
            let path = path_from_bytes(line);
            let id = self.registry.append(path.clone());
            self.backend.register(&path, id, ChangeSet::all())?;
            info!(path = %path.display(), "watching");
        }

        Ok(())
    }

    /// Report one change event on the output writer, flushed per line.
    fn emit_change(&mut self, id: SourceId, changes: ChangeSet) -> Result<()> {
        let Some(path) = self.registry.resolve(id) else {
            // Ids are only handed out by the registry, so this can't occur.
            warn!(?id, "change event for unknown source");
            return Ok(());
        };

        writeln!(self.out, "{}\t{}", path.display(), changes.describe())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Decode one input line into a path, byte-preserving where the platform
/// allows it.
#[cfg(unix)]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    use std::os::unix::ffi::OsStringExt;
    PathBuf::from(std::ffi::OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: Vec<u8>) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(&bytes).into_owned())
}
