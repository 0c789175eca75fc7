//! Helpers for explicit byte-order conversions.
//!
//! The monitor envelope is emitted untranslated by the capturing kernel, so
//! its fields are in host order, while the virtio transport header is always
//! little-endian. These helpers keep Clippy expectations scoped to the
//! conversion points so decoding code stays explicit about which order each
//! field uses.

/// Parse a host-order `u16`.
///
/// # Examples
///
/// ```
/// use vsockmon::byte_order::read_host_u16;
///
/// assert_eq!(read_host_u16(0x1234_u16.to_ne_bytes()), 0x1234);
/// ```
#[must_use]
pub fn read_host_u16(bytes: [u8; 2]) -> u16 {
    #[expect(
        clippy::host_endian_bytes,
        reason = "Monitor envelopes are captured in host byte order."
    )]
    u16::from_ne_bytes(bytes)
}

/// Parse a host-order `u32`.
///
/// # Examples
///
/// ```
/// use vsockmon::byte_order::read_host_u32;
///
/// assert_eq!(read_host_u32(0x1234_5678_u32.to_ne_bytes()), 0x1234_5678);
/// ```
#[must_use]
pub fn read_host_u32(bytes: [u8; 4]) -> u32 {
    #[expect(
        clippy::host_endian_bytes,
        reason = "Monitor envelopes are captured in host byte order."
    )]
    u32::from_ne_bytes(bytes)
}

/// Parse a little-endian `u16`.
///
/// # Examples
///
/// ```
/// use vsockmon::byte_order::read_le_u16;
///
/// assert_eq!(read_le_u16([0x34, 0x12]), 0x1234);
/// ```
#[must_use]
pub fn read_le_u16(bytes: [u8; 2]) -> u16 {
    #[expect(
        clippy::little_endian_bytes,
        reason = "Virtio transport headers are little-endian on the wire."
    )]
    u16::from_le_bytes(bytes)
}

/// Parse a little-endian `u32`.
///
/// # Examples
///
/// ```
/// use vsockmon::byte_order::read_le_u32;
///
/// assert_eq!(read_le_u32([0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
/// ```
#[must_use]
pub fn read_le_u32(bytes: [u8; 4]) -> u32 {
    #[expect(
        clippy::little_endian_bytes,
        reason = "Virtio transport headers are little-endian on the wire."
    )]
    u32::from_le_bytes(bytes)
}

/// Parse a little-endian `u64`.
///
/// # Examples
///
/// ```
/// use vsockmon::byte_order::read_le_u64;
///
/// assert_eq!(
///     read_le_u64([0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11]),
///     0x1122_3344_5566_7788
/// );
/// ```
#[must_use]
pub fn read_le_u64(bytes: [u8; 8]) -> u64 {
    #[expect(
        clippy::little_endian_bytes,
        reason = "Virtio transport headers are little-endian on the wire."
    )]
    u64::from_le_bytes(bytes)
}
