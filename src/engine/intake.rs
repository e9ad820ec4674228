// src/engine/intake.rs

//! Pure input intake: buffering, line splitting, and the drain loop.
//!
//! Kept free of channels, Tokio, and the filesystem so it can be unit
//! tested directly.

/// Buffered view of the input stream as fed by the pump.
#[derive(Debug, Default)]
pub struct InputStream {
    buf: Vec<u8>,
    /// Sticky: set once the producer reports true end-of-file.
    eof: bool,
}

/// One line taken from the stream. `consumed` counts the raw bytes the line
/// occupied, including its newline when present, for the drain accounting.
#[derive(Debug, PartialEq, Eq)]
pub struct RawLine {
    pub bytes: Vec<u8>,
    pub consumed: usize,
}

impl InputStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk received from the producer.
    pub fn feed(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Record that the producer hit true end-of-file.
    pub fn mark_eof(&mut self) {
        self.eof = true;
    }

    /// True once end-of-file is marked and no buffered bytes remain.
    pub fn exhausted(&self) -> bool {
        self.eof && self.buf.is_empty()
    }

    /// Take the next line.
    ///
    /// Yields a complete line with exactly one trailing newline stripped.
    /// Once end-of-file is marked, a trailing unterminated line is yielded
    /// as-is. Returns `None` when no complete line is buffered yet; the
    /// partial remainder stays buffered for the next chunk.
    pub fn next_line(&mut self) -> Option<RawLine> {
        if let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let rest = self.buf.split_off(pos + 1);
            let mut line = std::mem::replace(&mut self.buf, rest);
            let consumed = line.len();
            line.pop();
            return Some(RawLine {
                bytes: line,
                consumed,
            });
        }

        if self.eof && !self.buf.is_empty() {
            let line = std::mem::take(&mut self.buf);
            let consumed = line.len();
            return Some(RawLine {
                bytes: line,
                consumed,
            });
        }

        None
    }
}

/// Drain lines for one input-readability event.
///
/// `bytes_available` is the advertised size of the chunk that triggered the
/// event, `eof_signaled` whether it carried the end-of-file flag. The
/// advertised count is not trusted when end-of-file is flagged: the
/// terminating notification can carry an inaccurate or zero count, so in
/// that case the stream is drained until it reports exhaustion itself.
pub fn take_lines(
    stream: &mut InputStream,
    bytes_available: usize,
    eof_signaled: bool,
) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut bytes_read = 0usize;

    while bytes_read < bytes_available || (eof_signaled && !stream.exhausted()) {
        match stream.next_line() {
            Some(line) => {
                bytes_read += line.consumed;
                lines.push(line.bytes);
            }
            // No complete line buffered: either the chunk ended mid-line
            // (the remainder arrives with the next chunk) or the stream is
            // exhausted. Both end this drain.
            None => break,
        }
    }

    lines
}
