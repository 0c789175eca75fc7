//! Bounds-checked field reader over a captured frame.
//!
//! Every read checks the remaining length first and reports a
//! [`DecodeError::Truncated`] naming the field, so a header is never
//! reinterpreted from a buffer that is too short to hold it.

use bytes::Buf;

use crate::{
    byte_order::{read_host_u16, read_host_u32, read_le_u16, read_le_u32, read_le_u64},
    error::DecodeError,
};

/// Sequential reader of fixed-width integers.
///
/// # Examples
///
/// ```
/// use vsockmon::reader::FieldReader;
///
/// let frame = [0x01, 0x00, 0x02, 0x00];
/// let mut reader = FieldReader::at(&frame, 2);
/// assert_eq!(reader.le_u16("op").expect("op present"), 2);
/// assert!(reader.le_u16("flags").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct FieldReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> FieldReader<'a> {
    /// Create a reader positioned at the start of `frame`.
    #[must_use]
    pub fn new(frame: &'a [u8]) -> Self { Self::at(frame, 0) }

    /// Create a reader positioned `offset` bytes into `frame`.
    ///
    /// An offset past the end yields a reader with nothing remaining.
    #[must_use]
    pub fn at(frame: &'a [u8], offset: usize) -> Self {
        Self {
            buf: frame.get(offset..).unwrap_or_default(),
            offset,
        }
    }

    /// Offset of the next field relative to the start of the frame.
    #[must_use]
    pub fn offset(&self) -> usize { self.offset }

    /// Bytes left to read.
    #[must_use]
    pub fn remaining(&self) -> usize { self.buf.remaining() }

    /// Read a host-order `u16`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than two bytes remain.
    pub fn host_u16(&mut self, field: &'static str) -> Result<u16, DecodeError> {
        self.take::<2>(field).map(read_host_u16)
    }

    /// Read a host-order `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than four bytes remain.
    pub fn host_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        self.take::<4>(field).map(read_host_u32)
    }

    /// Read a little-endian `u16`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than two bytes remain.
    pub fn le_u16(&mut self, field: &'static str) -> Result<u16, DecodeError> {
        self.take::<2>(field).map(read_le_u16)
    }

    /// Read a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than four bytes remain.
    pub fn le_u32(&mut self, field: &'static str) -> Result<u32, DecodeError> {
        self.take::<4>(field).map(read_le_u32)
    }

    /// Read a little-endian `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if fewer than eight bytes remain.
    pub fn le_u64(&mut self, field: &'static str) -> Result<u64, DecodeError> {
        self.take::<8>(field).map(read_le_u64)
    }

    fn take<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], DecodeError> {
        if self.buf.remaining() < N {
            return Err(DecodeError::Truncated {
                field,
                offset: self.offset,
                need: N,
                have: self.buf.remaining(),
            });
        }
        let mut bytes = [0u8; N];
        self.buf.copy_to_slice(&mut bytes);
        self.offset += N;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::FieldReader;
    use crate::error::DecodeError;

    #[test]
    fn reads_advance_offset() {
        let frame = [0x01, 0x00, 0x02, 0x00, 0x00, 0x00];
        let mut reader = FieldReader::new(&frame);
        assert_eq!(reader.le_u16("type").expect("type present"), 1);
        assert_eq!(reader.offset(), 2);
        assert_eq!(reader.le_u32("len").expect("len present"), 2);
        assert_eq!(reader.offset(), 6);
        assert_eq!(reader.remaining(), 0);
    }

    #[rstest]
    #[case::at_start(0, 3)]
    #[case::mid_frame(2, 1)]
    #[case::past_end(9, 0)]
    fn short_reads_report_field_and_offset(#[case] start: usize, #[case] have: usize) {
        let frame = [0u8; 3];
        let mut reader = FieldReader::at(&frame, start);
        let err = reader.le_u32("flags").expect_err("frame too short");
        assert_eq!(
            err,
            DecodeError::Truncated {
                field: "flags",
                offset: start,
                need: 4,
                have,
            }
        );
        assert_eq!(reader.offset(), start);
    }

    #[test]
    fn failed_read_consumes_nothing() {
        let frame = [0xaa, 0xbb];
        let mut reader = FieldReader::new(&frame);
        assert!(reader.le_u64("src_cid").is_err());
        assert_eq!(reader.remaining(), 2);
        assert_eq!(
            reader.host_u16("op").expect("op present"),
            u16::from_ne_bytes([0xaa, 0xbb])
        );
    }
}
