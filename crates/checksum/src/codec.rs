//! Hex text ⇄ bytes, and checksum display formatting.
//!
//! Input parsing is strict: anything other than hex digits and whitespace is
//! rejected, as is a dangling half byte. Nothing is computed against input
//! that did not parse completely.

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

#[cfg(feature = "alloc")]
use crate::error::HexError;
use crate::params::Width;

/// Byte order in which a checksum is displayed and appended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ByteOrder {
  /// Least significant byte first.
  #[default]
  Little,
  /// Most significant byte first.
  Big,
}

impl ByteOrder {
  /// The low `width.bytes()` bytes of `value`, in this order.
  ///
  /// ```
  /// use checksum::{ByteOrder, Width};
  ///
  /// let le: Vec<u8> = ByteOrder::Little.bytes(0x4B37, Width::W16).collect();
  /// let be: Vec<u8> = ByteOrder::Big.bytes(0x4B37, Width::W16).collect();
  /// assert_eq!(le, [0x37, 0x4B]);
  /// assert_eq!(be, [0x4B, 0x37]);
  /// ```
  pub fn bytes(self, value: u32, width: Width) -> impl Iterator<Item = u8> {
    let n = width.bytes();
    (0..n).map(move |i| {
      let byte = match self {
        Self::Little => i,
        Self::Big => n - 1 - i,
      };
      (value >> (8 * byte)) as u8
    })
  }
}

#[cfg(feature = "alloc")]
#[inline]
const fn digit_value(c: char) -> Option<u8> {
  match c {
    '0'..='9' => Some(c as u8 - b'0'),
    'a'..='f' => Some(c as u8 - b'a' + 10),
    'A'..='F' => Some(c as u8 - b'A' + 10),
    _ => None,
  }
}

#[cfg(feature = "alloc")]
#[inline]
const fn hex_digit(nibble: u8) -> char {
  match nibble & 0x0F {
    n @ 0..=9 => (b'0' + n) as char,
    n => (b'A' + n - 10) as char,
  }
}

#[cfg(feature = "alloc")]
#[inline]
fn push_byte(out: &mut String, byte: u8) {
  out.push(hex_digit(byte >> 4));
  out.push(hex_digit(byte));
}

/// Parse hex text into bytes.
///
/// Whitespace is skipped wherever it appears and the remaining digits are
/// taken in pairs. Digits are case-insensitive.
///
/// ```
/// use checksum::codec::parse_hex;
///
/// assert_eq!(parse_hex("01 02 0a").unwrap(), [0x01, 0x02, 0x0A]);
/// assert_eq!(parse_hex("DEAD\nbeef").unwrap(), [0xDE, 0xAD, 0xBE, 0xEF]);
/// assert!(parse_hex("01 0").is_err());
/// assert!(parse_hex("0x01").is_err());
/// ```
#[cfg(feature = "alloc")]
pub fn parse_hex(text: &str) -> Result<Vec<u8>, HexError> {
  let mut out = Vec::with_capacity(text.len() / 2);
  let mut high: Option<u8> = None;
  let mut digits = 0usize;

  for (position, c) in text.chars().enumerate() {
    if c.is_ascii_whitespace() {
      continue;
    }
    let nibble = digit_value(c).ok_or(HexError::invalid_digit(c, position))?;
    digits += 1;
    high = match high {
      None => Some(nibble),
      Some(h) => {
        out.push((h << 4) | nibble);
        None
      }
    };
  }

  if high.is_some() {
    return Err(HexError::odd_digit_count(digits));
  }
  Ok(out)
}

/// Render a checksum as `2 * width.bytes()` uppercase hex digits.
///
/// With [`ByteOrder::Little`] the least significant byte is printed first.
///
/// ```
/// use checksum::{ByteOrder, Width, codec::format_hex};
///
/// assert_eq!(format_hex(0x4B37, Width::W16, ByteOrder::Big), "4B37");
/// assert_eq!(format_hex(0x4B37, Width::W16, ByteOrder::Little), "374B");
/// assert_eq!(format_hex(0x7, Width::W8, ByteOrder::Little), "07");
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn format_hex(value: u32, width: Width, order: ByteOrder) -> String {
  let mut out = String::with_capacity(width.bytes() * 2);
  for byte in order.bytes(value, width) {
    push_byte(&mut out, byte);
  }
  out
}

/// Encode bytes as uppercase hex, optionally separated by single spaces.
///
/// ```
/// use checksum::codec::encode_hex;
///
/// assert_eq!(encode_hex(&[0x01, 0xAB], true), "01 AB");
/// assert_eq!(encode_hex(&[0x01, 0xAB], false), "01AB");
/// assert_eq!(encode_hex(&[], true), "");
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn encode_hex(bytes: &[u8], spaced: bool) -> String {
  let mut out = String::with_capacity(bytes.len() * 3);
  for (i, &byte) in bytes.iter().enumerate() {
    if spaced && i > 0 {
      out.push(' ');
    }
    push_byte(&mut out, byte);
  }
  out
}

/// Re-render hex text in canonical form: uppercase, spaced or compact.
///
/// ```
/// use checksum::codec::normalize_hex;
///
/// assert_eq!(normalize_hex("0102 0a0b", true).unwrap(), "01 02 0A 0B");
/// assert_eq!(normalize_hex("01 02 0a 0b", false).unwrap(), "01020A0B");
/// ```
#[cfg(feature = "alloc")]
pub fn normalize_hex(text: &str, spaced: bool) -> Result<String, HexError> {
  parse_hex(text).map(|bytes| encode_hex(&bytes, spaced))
}

/// Append a checksum to hex text, following the text's own layout.
///
/// Trailing whitespace is dropped. If whitespace separates digits inside the
/// text, the checksum bytes are appended spaced; otherwise compactly. Leading
/// whitespace alone does not make the text spaced. `hex_text` is not parsed.
///
/// ```
/// use checksum::{ByteOrder, Width, codec::append_hex};
///
/// assert_eq!(append_hex("01 02 03\n", 0x4B37, Width::W16, ByteOrder::Big), "01 02 03 4B 37");
/// assert_eq!(append_hex("010203", 0x4B37, Width::W16, ByteOrder::Little), "010203374B");
/// assert_eq!(append_hex(" 010203", 0x48, Width::W8, ByteOrder::Little), " 01020348");
/// ```
#[cfg(feature = "alloc")]
#[must_use]
pub fn append_hex(hex_text: &str, value: u32, width: Width, order: ByteOrder) -> String {
  let text = hex_text.trim_end();
  let spaced = text.trim_start().chars().any(|c| c.is_ascii_whitespace());

  let mut out = String::with_capacity(text.len() + width.bytes() * 3);
  out.push_str(text);
  for byte in order.bytes(value, width) {
    if spaced {
      out.push(' ');
    }
    push_byte(&mut out, byte);
  }
  out
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
  use alloc::vec;

  use super::*;
  use crate::error::HexErrorKind;

  #[test]
  fn parses_separated_and_compact() {
    assert_eq!(parse_hex("01 02 03").unwrap(), vec![1, 2, 3]);
    assert_eq!(parse_hex("010203").unwrap(), vec![1, 2, 3]);
    assert_eq!(parse_hex("  0 1\t02\r\n03  ").unwrap(), vec![1, 2, 3]);
    assert_eq!(parse_hex("aBcD").unwrap(), vec![0xAB, 0xCD]);
  }

  #[test]
  fn empty_and_blank_input() {
    assert!(parse_hex("").unwrap().is_empty());
    assert!(parse_hex("   \n ").unwrap().is_empty());
  }

  #[test]
  fn rejects_invalid_characters() {
    let err = parse_hex("01 0g").unwrap_err();
    assert_eq!(err.kind(), HexErrorKind::InvalidDigit('g'));
    assert_eq!(err.position(), 4);

    for bad in ["0x01", "01,02", "01-02", "ü1", "01:"] {
      assert!(
        matches!(parse_hex(bad).unwrap_err().kind(), HexErrorKind::InvalidDigit(_)),
        "{bad}"
      );
    }
  }

  #[test]
  fn rejects_dangling_half_byte() {
    let err = parse_hex("01 02 0").unwrap_err();
    assert_eq!(err.kind(), HexErrorKind::OddDigitCount);
    assert_eq!(err.position(), 5);
  }

  #[test]
  fn invalid_character_wins_over_odd_length() {
    let err = parse_hex("0 z").unwrap_err();
    assert_eq!(err.kind(), HexErrorKind::InvalidDigit('z'));
  }

  #[test]
  fn formats_every_width_and_order() {
    assert_eq!(format_hex(0x48, Width::W8, ByteOrder::Big), "48");
    assert_eq!(format_hex(0x48, Width::W8, ByteOrder::Little), "48");
    assert_eq!(format_hex(0x0376_E6E7, Width::W32, ByteOrder::Big), "0376E6E7");
    assert_eq!(format_hex(0x0376_E6E7, Width::W32, ByteOrder::Little), "E7E67603");
    assert_eq!(format_hex(0x000A, Width::W16, ByteOrder::Big), "000A");
  }

  #[test]
  fn format_ignores_bits_above_width() {
    assert_eq!(format_hex(0xFFFF_1234, Width::W16, ByteOrder::Big), "1234");
  }

  #[test]
  fn format_then_parse_recovers_ordered_bytes() {
    for order in [ByteOrder::Little, ByteOrder::Big] {
      let text = format_hex(0xCBF4_3926, Width::W32, order);
      let bytes = parse_hex(&text).unwrap();
      assert_eq!(bytes, order.bytes(0xCBF4_3926, Width::W32).collect::<Vec<_>>());
    }
  }

  #[test]
  fn append_follows_inner_spacing_only() {
    assert_eq!(append_hex("01 02 03", 0x48, Width::W8, ByteOrder::Little), "01 02 03 48");
    assert_eq!(append_hex("010203", 0x48, Width::W8, ByteOrder::Little), "01020348");
    assert_eq!(append_hex(" 010203", 0x48, Width::W8, ByteOrder::Little), " 01020348");
    assert_eq!(append_hex("\t010203 \n", 0x48, Width::W8, ByteOrder::Little), "\t01020348");
    assert_eq!(append_hex("  01\n02  ", 0x1234, Width::W16, ByteOrder::Big), "  01\n02 12 34");
  }

  #[test]
  fn append_to_empty_text_is_the_bare_checksum() {
    assert_eq!(append_hex("", 0xCBF4_3926, Width::W32, ByteOrder::Big), "CBF43926");
    assert_eq!(append_hex("   ", 0xFF, Width::W8, ByteOrder::Big), "FF");
  }

  #[test]
  fn default_order_is_little() {
    assert_eq!(ByteOrder::default(), ByteOrder::Little);
  }
}
