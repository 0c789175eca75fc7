//! Field layout of the monitor envelope and its sub-headers.
//!
//! The envelope is laid out without padding:
//!
//! ```text
//! offset  width  field                 order
//!      0      2  envelope type         host
//!      2      2  generic op            host
//!      4     16  generic src/dst       host
//!     20     44  transport header      little-endian (virtio)
//!     64      -  payload               opaque
//! ```

use std::fmt;

use super::codes::{EnvelopeType, GenericOp, VirtioOp, VirtioType};
use crate::{error::DecodeError, reader::FieldReader, symbol::Symbol};

/// Width of the envelope type tag.
pub const TYPE_SIZE: usize = 2;
/// Width of the generic sub-header: op plus two (cid, port) endpoints.
pub const GENERIC_HEADER_SIZE: usize = 2 + 4 * 4;
/// Width of the virtio-vsock transport header.
pub const VIRTIO_HEADER_SIZE: usize = 8 + 8 + 4 + 4 + 4 + 2 + 2 + 4 + 4 + 4;
/// Offset of the transport header within the envelope.
pub const TRANSPORT_OFFSET: usize = TYPE_SIZE + GENERIC_HEADER_SIZE;
/// Fixed envelope size; shorter frames are truncated.
pub const HEADER_SIZE: usize = 64;

// Every known transport header must fit inside the fixed header.
const _: () = assert!(HEADER_SIZE >= TRANSPORT_OFFSET + VIRTIO_HEADER_SIZE);

/// A vsock address: context id and port.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// Context identifier of the guest or host.
    pub cid: u32,
    /// Port number.
    pub port: u32,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.cid, self.port)
    }
}

/// Transport-independent part of every envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenericHeader {
    /// Monitored operation.
    pub op: Symbol<GenericOp>,
    /// Sending endpoint.
    pub src: Endpoint,
    /// Receiving endpoint.
    pub dst: Endpoint,
}

impl GenericHeader {
    /// Read the generic sub-header at the reader's position.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the frame ends inside the header.
    pub fn parse(reader: &mut FieldReader<'_>) -> Result<Self, DecodeError> {
        let op = Symbol::from_code(reader.host_u16("generic op")?);
        let src = Endpoint {
            cid: reader.host_u32("generic src_cid")?,
            port: reader.host_u32("generic src_port")?,
        };
        let dst = Endpoint {
            cid: reader.host_u32("generic dst_cid")?,
            port: reader.host_u32("generic dst_port")?,
        };
        Ok(Self { op, src, dst })
    }
}

/// Packet header of the virtio-vsock transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VirtioHeader {
    pub src_cid: u64,
    pub dst_cid: u64,
    pub src_port: u32,
    pub dst_port: u32,
    /// Length of the packet payload.
    pub len: u32,
    pub kind: Symbol<VirtioType>,
    pub op: Symbol<VirtioOp>,
    pub flags: u32,
    /// Receive buffer space advertised by the sender.
    pub buf_alloc: u32,
    /// Bytes the sender has forwarded to its application.
    pub fwd_cnt: u32,
}

impl VirtioHeader {
    /// Read a virtio-vsock header at the reader's position.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the frame ends inside the header.
    pub fn parse(reader: &mut FieldReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            src_cid: reader.le_u64("virtio src_cid")?,
            dst_cid: reader.le_u64("virtio dst_cid")?,
            src_port: reader.le_u32("virtio src_port")?,
            dst_port: reader.le_u32("virtio dst_port")?,
            len: reader.le_u32("virtio len")?,
            kind: Symbol::from_code(reader.le_u16("virtio type")?),
            op: Symbol::from_code(reader.le_u16("virtio op")?),
            flags: reader.le_u32("virtio flags")?,
            buf_alloc: reader.le_u32("virtio buf_alloc")?,
            fwd_cnt: reader.le_u32("virtio fwd_cnt")?,
        })
    }
}

/// Transport header selected by the envelope type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportHeader {
    /// Generic envelopes carry no transport fields.
    Generic,
    /// A decoded virtio-vsock header.
    Virtio(VirtioHeader),
    /// The tag is not a known transport; nothing was decoded.
    Unrecognized(u16),
}

/// Read-only view over one captured monitor frame.
///
/// Accessors decode lazily, so a caller only pays for (and only risks a
/// truncation error on) the parts it prints.
#[derive(Clone, Copy, Debug)]
pub struct Envelope<'a> {
    frame: &'a [u8],
}

impl<'a> Envelope<'a> {
    /// Wrap the captured bytes of a frame.
    #[must_use]
    pub fn new(frame: &'a [u8]) -> Self { Self { frame } }

    /// Decode the envelope type tag.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the frame is shorter than the tag.
    pub fn kind(&self) -> Result<Symbol<EnvelopeType>, DecodeError> {
        FieldReader::new(self.frame)
            .host_u16("envelope type")
            .map(Symbol::from_code)
    }

    /// Decode the generic sub-header.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the frame ends inside it.
    pub fn generic(&self) -> Result<GenericHeader, DecodeError> {
        GenericHeader::parse(&mut FieldReader::at(self.frame, TYPE_SIZE))
    }

    /// Decode the transport header named by the type tag.
    ///
    /// Only known transports read past the generic sub-header.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the frame ends inside the tag or
    /// inside a known transport header.
    pub fn transport(&self) -> Result<TransportHeader, DecodeError> {
        match self.kind()? {
            Symbol::Known(EnvelopeType::Generic) => Ok(TransportHeader::Generic),
            Symbol::Known(EnvelopeType::Virtio) => {
                VirtioHeader::parse(&mut FieldReader::at(self.frame, TRANSPORT_OFFSET))
                    .map(TransportHeader::Virtio)
            }
            Symbol::Unknown(code) => Ok(TransportHeader::Unrecognized(code)),
        }
    }

    /// Payload bytes following the fixed header, bounded by `capture_len`.
    ///
    /// The range is clipped to the bytes actually captured, so a snapped
    /// frame yields a shorter (possibly empty) slice rather than a panic.
    #[must_use]
    pub fn payload(&self, capture_len: usize) -> &'a [u8] {
        let end = capture_len.min(self.frame.len());
        self.frame.get(HEADER_SIZE..end).unwrap_or_default()
    }
}
