//! Builder for raw monitor frames.
//!
//! The library only decodes; tests need the inverse to produce captures
//! with precise field values. Envelope fields are written in host order and
//! the transport block in little-endian order, matching what the kernel
//! emits.

use bytes::{BufMut, BytesMut};
use vsockmon::wire::{HEADER_SIZE, TRANSPORT_OFFSET};

/// Raw values for the virtio-vsock header block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VirtioFields {
    pub src_cid: u64,
    pub dst_cid: u64,
    pub src_port: u32,
    pub dst_port: u32,
    pub len: u32,
    pub kind: u16,
    pub op: u16,
    pub flags: u32,
    pub buf_alloc: u32,
    pub fwd_cnt: u32,
}

/// Assemble a frame field by field.
///
/// Codes are plain integers so tests can exercise values outside the
/// printer's tables.
#[derive(Clone, Debug, Default)]
pub struct FrameBuilder {
    kind: u16,
    op: u16,
    src: (u32, u32),
    dst: (u32, u32),
    virtio: VirtioFields,
    payload: Vec<u8>,
}

impl FrameBuilder {
    /// Start a frame with an arbitrary envelope type code.
    #[must_use]
    pub fn with_type(kind: u16) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Start a `GENERIC` envelope.
    #[must_use]
    pub fn generic() -> Self { Self::with_type(1) }

    /// Start a `VIRTIO` envelope.
    #[must_use]
    pub fn virtio() -> Self { Self::with_type(2) }

    /// Set the generic operation code.
    #[must_use]
    pub fn op(mut self, op: u16) -> Self {
        self.op = op;
        self
    }

    /// Set the generic source endpoint.
    #[must_use]
    pub fn src(mut self, cid: u32, port: u32) -> Self {
        self.src = (cid, port);
        self
    }

    /// Set the generic destination endpoint.
    #[must_use]
    pub fn dst(mut self, cid: u32, port: u32) -> Self {
        self.dst = (cid, port);
        self
    }

    /// Set the transport block contents.
    #[must_use]
    pub fn transport(mut self, fields: VirtioFields) -> Self {
        self.virtio = fields;
        self
    }

    /// Append payload bytes after the fixed header.
    #[must_use]
    pub fn payload(mut self, bytes: &[u8]) -> Self {
        self.payload.extend_from_slice(bytes);
        self
    }

    /// Encode the frame.
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        let mut buf = BytesMut::with_capacity(HEADER_SIZE + self.payload.len());
        buf.put_u16_ne(self.kind);
        buf.put_u16_ne(self.op);
        buf.put_u32_ne(self.src.0);
        buf.put_u32_ne(self.src.1);
        buf.put_u32_ne(self.dst.0);
        buf.put_u32_ne(self.dst.1);
        debug_assert_eq!(buf.len(), TRANSPORT_OFFSET);

        let v = &self.virtio;
        buf.put_u64_le(v.src_cid);
        buf.put_u64_le(v.dst_cid);
        buf.put_u32_le(v.src_port);
        buf.put_u32_le(v.dst_port);
        buf.put_u32_le(v.len);
        buf.put_u16_le(v.kind);
        buf.put_u16_le(v.op);
        buf.put_u32_le(v.flags);
        buf.put_u32_le(v.buf_alloc);
        buf.put_u32_le(v.fwd_cnt);
        debug_assert_eq!(buf.len(), HEADER_SIZE);

        buf.extend_from_slice(&self.payload);
        buf.to_vec()
    }
}
