#![doc(html_root_url = "https://docs.rs/vsockmon/latest")]
//! Public API for the `vsockmon` library.
//!
//! This crate decodes frames captured from an AF_VSOCK monitor device into
//! one-line (or, with verbosity, multi-line) textual summaries. Decoding is
//! best effort: short frames and unknown codes degrade the output rather than
//! raising errors.
//!
//! ```
//! use vsockmon::{PrintOptions, VsockPrinter};
//!
//! let mut frame = Vec::new();
//! frame.extend_from_slice(&1u16.to_ne_bytes()); // GENERIC
//! frame.extend_from_slice(&1u16.to_ne_bytes()); // CONNECT
//! for value in [7u32, 100, 8, 200] {
//!     frame.extend_from_slice(&value.to_ne_bytes());
//! }
//! frame.resize(vsockmon::wire::HEADER_SIZE, 0);
//!
//! let mut out = String::new();
//! VsockPrinter::new(PrintOptions::new()).print(&mut out, &frame, frame.len(), frame.len());
//! assert_eq!(out, "GENERIC 7.100 > 8.200 CONNECT, length 64");
//! ```

pub mod byte_order;
pub mod capture;
pub mod config;
pub mod dump;
pub mod error;
pub mod metrics;
pub mod printer;
pub mod reader;
pub mod symbol;
pub mod wire;

pub use capture::CaptureRecord;
pub use config::{PrintOptions, Verbosity};
pub use dump::{HexDump, PayloadDump};
pub use error::{DecodeError, PrintError};
pub use crate::metrics::{FRAMES_DECODED, FRAMES_TRUNCATED};
pub use printer::{TRUNCATION_MARKER, VsockPrinter};
