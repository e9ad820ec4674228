// src/errors.rs

//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

/// Every fault class here is fatal. A watcher with inconsistent internal
/// state is worse than a crashed one, so there is no skip-and-continue path;
/// the only transparent retry in the crate is the interrupted-read retry in
/// the input pump.
#[derive(Error, Debug)]
pub enum WatchpipeError {
    #[error("couldn't open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("couldn't monitor {}", .path.display())]
    Register {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },

    #[error("couldn't read input")]
    InputRead(#[source] std::io::Error),

    #[error("couldn't install signal handler")]
    Signal(#[source] std::io::Error),

    /// The engine channel ran out of senders. The watch backend holds a
    /// sender for the engine's entire lifetime, so this cannot fire in a
    /// correctly wired process.
    #[error("event channel closed unexpectedly")]
    ChannelClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, WatchpipeError>;
