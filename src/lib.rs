// src/lib.rs

pub mod changes;
pub mod cli;
pub mod engine;
pub mod errors;
pub mod input;
pub mod logging;
pub mod registry;
pub mod watch;

use tokio::sync::mpsc;

use crate::engine::{Engine, EngineEvent};
use crate::errors::Result;
use crate::registry::PathRegistry;
use crate::watch::NotifyBackend;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - the shared path registry
/// - the engine event channel
/// - the SIGUSR1 diagnostic dump
/// - the stdin pump
/// - the notify watch backend and the dispatch loop
///
/// The returned future only resolves on a fatal error; normal termination
/// is the process being killed.
pub async fn run() -> Result<()> {
    let registry = PathRegistry::new();

    // The one wait primitive everything funnels into.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<EngineEvent>();

    spawn_dump_on_signal(registry.clone())?;

    input::spawn_stdin_pump(event_tx.clone());

    let backend = NotifyBackend::new(event_tx);
    let engine = Engine::new(registry, backend, event_rx, std::io::stdout());

    engine.run().await
}

/// Install the SIGUSR1 diagnostic dump: on each signal, write the currently
/// watched paths to stderr, newest first.
///
/// Read-only and best-effort. The dump task holds its own registry handle;
/// the engine loop never observes the signal.
#[cfg(unix)]
fn spawn_dump_on_signal(registry: PathRegistry) -> Result<()> {
    use std::io::Write;

    use tokio::signal::unix::{SignalKind, signal};
    use tracing::debug;

    use crate::errors::WatchpipeError;

    let mut stream = signal(SignalKind::user_defined1()).map_err(WatchpipeError::Signal)?;

    tokio::spawn(async move {
        while stream.recv().await.is_some() {
            debug!("dumping watched paths on SIGUSR1");
            let mut err = std::io::stderr().lock();
            for path in registry.snapshot_newest_first() {
                let _ = writeln!(err, "{}", path.display());
            }
        }
    });

    Ok(())
}

#[cfg(not(unix))]
fn spawn_dump_on_signal(_registry: PathRegistry) -> Result<()> {
    Ok(())
}
