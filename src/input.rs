// src/input.rs

//! Input pump: bridges blocking stdin reads into the engine channel.

use std::io::Read;

use tokio::sync::mpsc;
use tracing::debug;

use crate::engine::EngineEvent;

/// Spawn the stdin pump on a blocking task.
///
/// The pump forwards raw chunks as [`EngineEvent::Input`]; line splitting is
/// the engine's job. A zero-byte read marks true end-of-file and ends the
/// pump; already-registered watches keep reporting indefinitely after that.
pub fn spawn_stdin_pump(tx: mpsc::UnboundedSender<EngineEvent>) -> tokio::task::JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin();
        pump(stdin.lock(), &tx);
    })
}

/// Read chunks from `reader` until end-of-file, a read error, or a closed
/// channel. Interrupted reads are retried transparently: signal delivery is
/// never an event and never ends the pump.
pub fn pump<R: Read>(mut reader: R, tx: &mpsc::UnboundedSender<EngineEvent>) {
    let mut chunk = [0u8; 4096];

    loop {
        match reader.read(&mut chunk) {
            Ok(0) => {
                debug!("input pump reached end-of-file");
                let _ = tx.send(EngineEvent::Input {
                    data: Vec::new(),
                    eof: true,
                });
                return;
            }
            Ok(n) => {
                let sent = tx.send(EngineEvent::Input {
                    data: chunk[..n].to_vec(),
                    eof: false,
                });
                if sent.is_err() {
                    return;
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => {
                let _ = tx.send(EngineEvent::InputFailed(err));
                return;
            }
        }
    }
}
