//! Wire layout of AF_VSOCK monitor frames.
//!
//! Declarative description of the envelope header, the generic and virtio
//! sub-headers, and the code tables used to name their numeric fields.

pub mod codes;
pub mod header;

pub use codes::{EnvelopeType, GenericOp, VirtioOp, VirtioType};
pub use header::{
    Endpoint,
    Envelope,
    GENERIC_HEADER_SIZE,
    GenericHeader,
    HEADER_SIZE,
    TRANSPORT_OFFSET,
    TYPE_SIZE,
    TransportHeader,
    VIRTIO_HEADER_SIZE,
    VirtioHeader,
};
