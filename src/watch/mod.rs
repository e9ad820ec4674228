// src/watch/mod.rs

//! Arming file watches.
//!
//! This module hides the cross-platform `notify` watcher behind the
//! [`WatchBackend`] seam. It knows nothing about input parsing or output
//! formatting; it only turns registrations into change events on the engine
//! channel.

pub mod backend;

pub use backend::{NotifyBackend, WatchBackend};
