//! Symbolic rendering of numeric protocol codes.
//!
//! Each code table is a closed enum implementing [`CodeTable`]. Decoded
//! fields hold a [`Symbol`], which remembers the raw code when it falls
//! outside the table so it can still be printed.

use std::fmt;

/// A closed mapping from numeric codes to display names.
pub trait CodeTable: Copy + Sized {
    /// Label printed before the raw code when a value is not in the table.
    const FALLBACK: &'static str;

    /// Look up the table entry for `code`.
    fn from_code(code: u16) -> Option<Self>;

    /// Numeric code of this entry.
    fn code(self) -> u16;

    /// Display name of this entry.
    fn name(self) -> &'static str;
}

/// A decoded code: either a table entry or the raw unrecognised value.
///
/// # Examples
///
/// ```
/// use vsockmon::{symbol::Symbol, wire::GenericOp};
///
/// assert_eq!(Symbol::<GenericOp>::from_code(1).to_string(), "CONNECT");
/// assert_eq!(Symbol::<GenericOp>::from_code(9).to_string(), "invalid op (9)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symbol<T> {
    /// The code is listed in the table.
    Known(T),
    /// The code is not listed; the raw value is kept for display.
    Unknown(u16),
}

impl<T: CodeTable> Symbol<T> {
    /// Resolve `code` against the table.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        T::from_code(code).map_or(Self::Unknown(code), Self::Known)
    }

    /// The raw numeric code.
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::Known(entry) => entry.code(),
            Self::Unknown(code) => code,
        }
    }

    /// The table entry, if the code was recognised.
    #[must_use]
    pub fn known(self) -> Option<T> {
        match self {
            Self::Known(entry) => Some(entry),
            Self::Unknown(_) => None,
        }
    }
}

impl<T: CodeTable> fmt::Display for Symbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(entry) => f.write_str(entry.name()),
            Self::Unknown(code) => write!(f, "{} ({code})", T::FALLBACK),
        }
    }
}
