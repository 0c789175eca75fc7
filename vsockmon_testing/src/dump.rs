//! Payload dump collaborator that records what it was handed.

use std::{
    fmt,
    sync::{Mutex, PoisonError},
};

use vsockmon::dump::PayloadDump;

/// Records every invocation instead of rendering it.
///
/// A marker line `<dump N bytes>` is written to the sink so tests can also
/// check where the dump landed in the output.
#[derive(Debug, Default)]
pub struct RecordingDump {
    calls: Mutex<Vec<(String, Vec<u8>)>>,
}

impl RecordingDump {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Indent prefix and bytes of each call, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(String, Vec<u8>)> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PayloadDump for RecordingDump {
    fn dump<W: fmt::Write + ?Sized>(&self, out: &mut W, indent: &str, bytes: &[u8]) -> fmt::Result {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((indent.to_owned(), bytes.to_vec()));
        write!(out, "<dump {} bytes>", bytes.len())
    }
}
