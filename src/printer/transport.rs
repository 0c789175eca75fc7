//! Transport sub-header rendering.

use std::fmt;

use crate::wire::VirtioHeader;

/// Render a virtio-vsock header as a comma-separated field list.
///
/// Endpoint fields are left out; the envelope line already shows them.
///
/// # Errors
///
/// Returns [`fmt::Error`] if the sink rejects a write.
pub fn print_virtio_header<W: fmt::Write + ?Sized>(
    out: &mut W,
    header: &VirtioHeader,
) -> fmt::Result {
    write!(
        out,
        "len {}, type {}, op {}, flags {:x}, buf_alloc {}, fwd_cnt {}",
        header.len, header.kind, header.op, header.flags, header.buf_alloc, header.fwd_cnt,
    )
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::print_virtio_header;
    use crate::{
        symbol::Symbol,
        wire::{VirtioHeader, VirtioOp, VirtioType},
    };

    fn header(kind: u16, op: u16, flags: u32) -> VirtioHeader {
        VirtioHeader {
            src_cid: 3,
            dst_cid: 2,
            src_port: 1024,
            dst_port: 80,
            len: 10,
            kind: Symbol::from_code(kind),
            op: Symbol::from_code(op),
            flags,
            buf_alloc: 1024,
            fwd_cnt: 5,
        }
    }

    #[test]
    fn renders_fields_in_fixed_order() {
        let mut out = String::new();
        print_virtio_header(&mut out, &header(1, 5, 1)).expect("write to string");
        assert_eq!(
            out,
            "len 10, type STREAM, op RW, flags 1, buf_alloc 1024, fwd_cnt 5"
        );
    }

    #[rstest]
    #[case::unknown_type(9, 5, "type Invalid type (9), op RW")]
    #[case::unknown_op(1, 42, "type STREAM, op Invalid op (42)")]
    #[case::credit_update(1, 6, "op CREDIT_UPDATE")]
    fn unknown_codes_fall_back(#[case] kind: u16, #[case] op: u16, #[case] expected: &str) {
        let mut out = String::new();
        print_virtio_header(&mut out, &header(kind, op, 0)).expect("write to string");
        assert!(out.contains(expected), "{out:?} lacks {expected:?}");
    }

    #[test]
    fn flags_render_as_bare_lowercase_hex() {
        let mut out = String::new();
        print_virtio_header(&mut out, &header(1, 3, 0xdead_beef)).expect("write to string");
        assert!(out.contains("flags deadbeef,"));
        assert_eq!(
            Symbol::<VirtioOp>::from_code(3).known(),
            Some(VirtioOp::Rst)
        );
        assert_eq!(
            Symbol::<VirtioType>::from_code(1).known(),
            Some(VirtioType::Stream)
        );
    }
}
