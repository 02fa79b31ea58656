//! Ring-trimmed byte buffer for merged stdout/stderr capture.

/// Once the buffer exceeds this size it is trimmed back down to
/// [`TRIM_TO_BYTES`], and the trimmed byte count accumulates in
/// `dropped_bytes`.
const SOFT_CAP_BYTES: usize = 2 * 1024 * 1024;
const TRIM_TO_BYTES: usize = 512 * 1024;

/// Accumulates output chunks from a running child process, trimming from the
/// front once the total grows past a soft cap so a runaway process can't
/// grow this buffer unbounded.
#[derive(Debug, Default)]
pub struct RingBuffer {
    data: Vec<u8>,
    dropped_bytes: u64,
}

impl RingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.data.extend_from_slice(chunk);
        if self.data.len() > SOFT_CAP_BYTES {
            let excess = self.data.len() - TRIM_TO_BYTES;
            self.dropped_bytes += excess as u64;
            self.data.drain(0..excess);
        }
    }

    pub fn dropped_bytes(&self) -> u64 {
        self.dropped_bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
#[path = "buffer.test.rs"]
mod tests;
