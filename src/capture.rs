//! Captured frame records as handed over by a capture loop.

/// One captured frame and the length it had on the wire.
///
/// `data` may be shorter than `len` when the capture was snapped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureRecord<'a> {
    data: &'a [u8],
    len: usize,
}

impl<'a> CaptureRecord<'a> {
    /// Pair captured bytes with their on-wire length.
    #[must_use]
    pub fn new(data: &'a [u8], len: usize) -> Self { Self { data, len } }

    /// A record whose capture was not snapped.
    #[must_use]
    pub fn from_bytes(data: &'a [u8]) -> Self { Self::new(data, data.len()) }

    /// Captured bytes.
    #[must_use]
    pub fn data(&self) -> &'a [u8] { self.data }

    /// On-wire length.
    #[must_use]
    pub fn len(&self) -> usize { self.len }

    /// Whether the frame was empty on the wire.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Whether fewer bytes were captured than were on the wire.
    #[must_use]
    pub fn is_snapped(&self) -> bool { self.data.len() < self.len }
}
