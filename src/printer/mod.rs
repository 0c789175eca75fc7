//! Textual rendering of AF_VSOCK monitor frames.
//!
//! [`VsockPrinter::print`] is the entry point a capture loop calls once per
//! frame. It never fails: frames too short for the fixed header print only
//! [`TRUNCATION_MARKER`], unknown codes print a numeric fallback, and sink
//! failures are logged. The return value is always the declared length so
//! the caller's byte accounting is unaffected by what was printed.

pub mod transport;

use std::fmt;

use log::warn;
use tracing::debug;

pub use self::transport::print_virtio_header;
use crate::{
    capture::CaptureRecord,
    config::PrintOptions,
    dump::{HexDump, PayloadDump},
    error::PrintError,
    metrics::{inc_decoded, inc_truncated},
    symbol::Symbol,
    wire::{Envelope, GenericOp, HEADER_SIZE, TransportHeader},
};

/// Text emitted for frames too short to decode.
pub const TRUNCATION_MARKER: &str = " [|vsock]";

/// Indent handed to the payload dump.
pub const PAYLOAD_INDENT: &str = "\t";

/// Renders monitor frames according to a fixed set of options.
///
/// # Examples
///
/// ```
/// use vsockmon::{PrintOptions, VsockPrinter};
///
/// let printer = VsockPrinter::new(PrintOptions::new());
/// let mut out = String::new();
/// assert_eq!(printer.print(&mut out, &[0u8; 8], 8, 8), 8);
/// assert_eq!(out, " [|vsock]");
/// ```
#[derive(Clone, Debug, Default)]
pub struct VsockPrinter<D = HexDump> {
    options: PrintOptions,
    dump: D,
}

impl VsockPrinter<HexDump> {
    /// Create a printer using [`HexDump`] for payloads.
    #[must_use]
    pub fn new(options: PrintOptions) -> Self {
        Self {
            options,
            dump: HexDump,
        }
    }
}

impl<D: PayloadDump> VsockPrinter<D> {
    /// Replace the payload dump collaborator.
    #[must_use]
    pub fn with_dump<E: PayloadDump>(self, dump: E) -> VsockPrinter<E> {
        VsockPrinter {
            options: self.options,
            dump,
        }
    }

    /// The options frames are rendered with.
    #[must_use]
    pub fn options(&self) -> PrintOptions { self.options }

    /// Print one frame and return `declared_len`.
    ///
    /// `capture_len` is the frame's on-wire length; it decides truncation,
    /// is shown as `length`, and bounds the payload dump. `frame` holds the
    /// bytes actually captured and may be shorter.
    pub fn print<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        frame: &[u8],
        declared_len: usize,
        capture_len: usize,
    ) -> usize {
        let result = if capture_len < HEADER_SIZE {
            debug!(capture_len, need = HEADER_SIZE, "vsock frame shorter than monitor header");
            truncated(out)
        } else {
            match self.print_envelope(out, &Envelope::new(frame), capture_len) {
                Err(PrintError::Decode(error)) => {
                    debug!(%error, captured = frame.len(), "vsock frame truncated mid-header");
                    truncated(out)
                }
                other => other,
            }
        };
        if let Err(error) = result {
            warn!("failed to write vsock frame description: {error}");
        }
        declared_len
    }

    /// Print a captured record, using its on-wire length for both lengths.
    pub fn print_record<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        record: &CaptureRecord<'_>,
    ) -> usize {
        self.print(out, record.data(), record.len(), record.len())
    }

    fn print_envelope<W: fmt::Write + ?Sized>(
        &self,
        out: &mut W,
        envelope: &Envelope<'_>,
        capture_len: usize,
    ) -> Result<(), PrintError> {
        let verbosity = self.options.verbosity();

        let kind = envelope.kind()?;
        write!(out, "{kind}")?;

        if verbosity.is_verbose() {
            if let TransportHeader::Virtio(header) = envelope.transport()? {
                out.write_str(" (")?;
                print_virtio_header(out, &header)?;
                out.write_char(')')?;
            }
            out.write_str("\n\t")?;
        } else {
            out.write_char(' ')?;
        }

        let generic = envelope.generic()?;
        inc_decoded(kind);
        write!(
            out,
            "{} > {} {}, length {capture_len}",
            generic.src, generic.dst, generic.op
        )?;

        if verbosity.dumps_payload()
            && generic.op == Symbol::Known(GenericOp::Payload)
            && capture_len > HEADER_SIZE
        {
            let payload = envelope.payload(capture_len);
            let expected = capture_len - HEADER_SIZE;
            if payload.is_empty() {
                debug!(expected, "vsock payload not captured; skipping dump");
                return Ok(());
            }
            if payload.len() < expected {
                debug!(expected, captured = payload.len(), "vsock payload clipped to capture");
            }
            out.write_char('\n')?;
            self.dump.dump(out, PAYLOAD_INDENT, payload)?;
        }
        Ok(())
    }
}

fn truncated<W: fmt::Write + ?Sized>(out: &mut W) -> Result<(), PrintError> {
    inc_truncated();
    out.write_str(TRUNCATION_MARKER)?;
    Ok(())
}
