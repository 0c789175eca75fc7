//! Rendering of opaque payload bytes.
//!
//! The printer never interprets payload contents; it hands the byte range to
//! a [`PayloadDump`] collaborator. [`HexDump`] is the default and follows the
//! familiar offset / hex / ASCII layout of packet printers.

use std::fmt;

/// Bytes rendered per output line.
pub const BYTES_PER_LINE: usize = 16;

// Eight groups of four hex digits separated by single spaces.
const HEX_COLUMN_WIDTH: usize = BYTES_PER_LINE * 2 + BYTES_PER_LINE / 2 - 1;

/// Renders a raw byte range into an output sink.
pub trait PayloadDump {
    /// Write `bytes` to `out`, starting each line with `indent`.
    ///
    /// # Errors
    ///
    /// Returns [`fmt::Error`] if the sink rejects a write.
    fn dump<W: fmt::Write + ?Sized>(&self, out: &mut W, indent: &str, bytes: &[u8]) -> fmt::Result;
}

impl<T: PayloadDump + ?Sized> PayloadDump for &T {
    fn dump<W: fmt::Write + ?Sized>(&self, out: &mut W, indent: &str, bytes: &[u8]) -> fmt::Result {
        (**self).dump(out, indent, bytes)
    }
}

/// Offset, hex and ASCII dump, sixteen bytes per line.
///
/// # Examples
///
/// ```
/// use vsockmon::dump::{HexDump, PayloadDump};
///
/// let mut out = String::new();
/// HexDump.dump(&mut out, "\t", b"hi!").expect("write to string");
/// assert_eq!(out, format!("\t0x0000:  {:<39}  hi!", "6869 21"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HexDump;

impl PayloadDump for HexDump {
    fn dump<W: fmt::Write + ?Sized>(&self, out: &mut W, indent: &str, bytes: &[u8]) -> fmt::Result {
        for (line, chunk) in bytes.chunks(BYTES_PER_LINE).enumerate() {
            if line > 0 {
                out.write_char('\n')?;
            }
            write!(out, "{indent}0x{:04x}: ", line * BYTES_PER_LINE)?;
            for pair in chunk.chunks(2) {
                out.write_char(' ')?;
                for byte in pair {
                    write!(out, "{byte:02x}")?;
                }
            }
            let written = chunk.len() * 2 + chunk.len().div_ceil(2) - 1;
            write!(out, "{:pad$}  ", "", pad = HEX_COLUMN_WIDTH - written)?;
            for &byte in chunk {
                out.write_char(printable(byte))?;
            }
        }
        Ok(())
    }
}

fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        char::from(byte)
    } else {
        '.'
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{HexDump, PayloadDump};

    fn render(bytes: &[u8]) -> String {
        let mut out = String::new();
        HexDump.dump(&mut out, "\t", bytes).expect("write to string");
        out
    }

    #[test]
    fn empty_range_writes_nothing() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn full_line_has_no_padding() {
        let bytes: Vec<u8> = (b'a'..=b'p').collect();
        assert_eq!(
            render(&bytes),
            "\t0x0000:  6162 6364 6566 6768 696a 6b6c 6d6e 6f70  abcdefghijklmnop"
        );
    }

    #[test]
    fn lines_break_every_sixteen_bytes() {
        let bytes = [0u8; 20];
        let out = render(&bytes);
        let lines: Vec<&str> = out.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\t0x0000:  0000 "));
        assert_eq!(
            lines[1],
            format!("\t0x0010:  {:<39}  ....", "0000 0000")
        );
    }

    #[rstest]
    #[case::control(0x07, '.')]
    #[case::space(b' ', ' ')]
    #[case::high_bit(0xe9, '.')]
    #[case::letter(b'Z', 'Z')]
    fn ascii_column_masks_non_printables(#[case] byte: u8, #[case] shown: char) {
        assert!(render(&[byte]).ends_with(&format!("  {shown}")));
    }
}
