//! Error types for frame decoding and printing.
//!
//! Neither type escapes the printer's entry point: decode failures degrade to
//! the truncation marker and sink failures are logged. They exist so the
//! inner stages can use `?` and so tests can assert on precise diagnostics.

use std::fmt;

use thiserror::Error;

/// Errors produced while reading fixed-width fields from a captured frame.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The frame ended before the named field could be read.
    #[error("truncated {field} at offset {offset}: need {need} bytes, have {have}")]
    Truncated {
        /// Name of the field being read.
        field: &'static str,
        /// Byte offset of the field within the frame.
        offset: usize,
        /// Width of the field in bytes.
        need: usize,
        /// Bytes remaining in the frame at `offset`.
        have: usize,
    },
}

/// Errors raised while rendering a frame into an output sink.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrintError {
    /// A header field could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The output sink rejected a write.
    #[error("output sink rejected write")]
    Sink(#[from] fmt::Error),
}
