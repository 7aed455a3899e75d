//! Error types for CRC dispatch, parameter ingestion, and hex decoding.
//!
//! Each concern has its own small error type so callers that only touch one
//! layer (for example, only the hex codec) match on exactly the failures that
//! layer can produce. [`Error`] unifies them for the combined entry points.

use core::fmt;

use crate::params::Width;

// ─────────────────────────────────────────────────────────────────────────────
// Hex input
// ─────────────────────────────────────────────────────────────────────────────

/// What was wrong with a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexErrorKind {
  /// A character that is neither a hex digit nor whitespace.
  InvalidDigit(char),
  /// An odd number of hex digits: the last byte is incomplete.
  OddDigitCount,
}

/// Malformed hex input.
///
/// `position` is the character index of the offending character for
/// [`HexErrorKind::InvalidDigit`], and the number of digits seen for
/// [`HexErrorKind::OddDigitCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexError {
  kind: HexErrorKind,
  position: usize,
}

impl HexError {
  #[inline]
  #[must_use]
  pub(crate) const fn invalid_digit(ch: char, position: usize) -> Self {
    Self {
      kind: HexErrorKind::InvalidDigit(ch),
      position,
    }
  }

  #[inline]
  #[must_use]
  pub(crate) const fn odd_digit_count(digits: usize) -> Self {
    Self {
      kind: HexErrorKind::OddDigitCount,
      position: digits,
    }
  }

  #[inline]
  #[must_use]
  pub const fn kind(&self) -> HexErrorKind {
    self.kind
  }

  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.position
  }
}

impl fmt::Display for HexError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.kind {
      HexErrorKind::InvalidDigit(ch) => {
        write!(f, "invalid hex character {ch:?} at position {}", self.position)
      }
      HexErrorKind::OddDigitCount => {
        write!(f, "odd number of hex digits ({}): last byte is incomplete", self.position)
      }
    }
  }
}

impl core::error::Error for HexError {}

// ─────────────────────────────────────────────────────────────────────────────
// Algorithm resolution
// ─────────────────────────────────────────────────────────────────────────────

/// No algorithm with the requested name exists in the requested width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownAlgorithm {
  width: Width,
}

impl UnknownAlgorithm {
  #[inline]
  #[must_use]
  pub(crate) const fn new(width: Width) -> Self {
    Self { width }
  }

  /// The width class the lookup was restricted to.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.width
  }
}

impl fmt::Display for UnknownAlgorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unknown algorithm for {}-bit checksums", self.width.bits())
  }
}

impl core::error::Error for UnknownAlgorithm {}

// ─────────────────────────────────────────────────────────────────────────────
// Parameter validation
// ─────────────────────────────────────────────────────────────────────────────

/// A width-bounded parameter field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  /// Generator polynomial.
  Polynomial,
  /// Initial register value.
  Initial,
  /// Final XOR value.
  XorOut,
}

impl Field {
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Polynomial => "polynomial",
      Self::Initial => "init",
      Self::XorOut => "xorout",
    }
  }
}

/// What was wrong with a parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecErrorKind {
  /// Width is not 8, 16 or 32.
  UnsupportedWidth(u32),
  /// A field has bits set above the register width.
  Overflow { field: Field, value: u64, width: Width },
  /// The algorithm name is empty (or has no letters or digits).
  EmptyName,
  /// Another row already uses this name in the same width class.
  Duplicate { width: Width },
}

/// Invalid algorithm parameters.
///
/// `row` is set when the parameters came from an ingested table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecError {
  kind: SpecErrorKind,
  row: Option<usize>,
}

impl SpecError {
  #[inline]
  #[must_use]
  pub(crate) const fn new(kind: SpecErrorKind) -> Self {
    Self { kind, row: None }
  }

  #[inline]
  #[must_use]
  pub(crate) const fn at_row(self, row: usize) -> Self {
    Self { kind: self.kind, row: Some(row) }
  }

  #[inline]
  #[must_use]
  pub const fn kind(&self) -> SpecErrorKind {
    self.kind
  }

  #[inline]
  #[must_use]
  pub const fn row(&self) -> Option<usize> {
    self.row
  }
}

impl fmt::Display for SpecError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(row) = self.row {
      write!(f, "row {row}: ")?;
    }
    match self.kind {
      SpecErrorKind::UnsupportedWidth(bits) => write!(f, "unsupported width {bits} (expected 8, 16 or 32)"),
      SpecErrorKind::Overflow { field, value, width } => write!(
        f,
        "{} 0x{value:X} does not fit in {} bits",
        field.name(),
        width.bits()
      ),
      SpecErrorKind::EmptyName => f.write_str("algorithm name is empty"),
      SpecErrorKind::Duplicate { width } => {
        write!(f, "duplicate algorithm name in the {}-bit class", width.bits())
      }
    }
  }
}

impl core::error::Error for SpecError {}

// ─────────────────────────────────────────────────────────────────────────────
// Umbrella
// ─────────────────────────────────────────────────────────────────────────────

/// Any failure of a checksum request.
///
/// Every error is scoped to the single request that produced it. None are
/// retryable: the computation is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  MalformedHexInput(HexError),
  UnknownAlgorithm(UnknownAlgorithm),
  InvalidSpec(SpecError),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MalformedHexInput(_) => f.write_str("malformed hex input"),
      Self::UnknownAlgorithm(_) => f.write_str("unknown algorithm"),
      Self::InvalidSpec(_) => f.write_str("invalid algorithm parameters"),
    }
  }
}

impl core::error::Error for Error {
  fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
    match self {
      Self::MalformedHexInput(e) => Some(e),
      Self::UnknownAlgorithm(e) => Some(e),
      Self::InvalidSpec(e) => Some(e),
    }
  }
}

impl From<HexError> for Error {
  #[inline]
  fn from(e: HexError) -> Self {
    Self::MalformedHexInput(e)
  }
}

impl From<UnknownAlgorithm> for Error {
  #[inline]
  fn from(e: UnknownAlgorithm) -> Self {
    Self::UnknownAlgorithm(e)
  }
}

impl From<SpecError> for Error {
  #[inline]
  fn from(e: SpecError) -> Self {
    Self::InvalidSpec(e)
  }
}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;
  use core::error::Error as _;

  use super::*;

  #[test]
  fn hex_error_messages() {
    assert_eq!(
      HexError::invalid_digit('g', 3).to_string(),
      "invalid hex character 'g' at position 3"
    );
    assert_eq!(
      HexError::odd_digit_count(5).to_string(),
      "odd number of hex digits (5): last byte is incomplete"
    );
  }

  #[test]
  fn spec_error_mentions_row() {
    let err = SpecError::new(SpecErrorKind::Overflow {
      field: Field::Polynomial,
      value: 0x1_8005,
      width: Width::W16,
    })
    .at_row(4);
    assert_eq!(err.row(), Some(4));
    assert_eq!(err.to_string(), "row 4: polynomial 0x18005 does not fit in 16 bits");
  }

  #[test]
  fn unknown_algorithm_message() {
    assert_eq!(
      UnknownAlgorithm::new(Width::W32).to_string(),
      "unknown algorithm for 32-bit checksums"
    );
  }

  #[test]
  fn umbrella_exposes_source() {
    let err = Error::from(HexError::odd_digit_count(1));
    assert_eq!(err.to_string(), "malformed hex input");
    let source = err.source().map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("odd number of hex digits (1): last byte is incomplete"));
  }

  #[test]
  fn trait_bounds() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<HexError>();
    assert_send_sync::<SpecError>();
    assert_send_sync::<UnknownAlgorithm>();
  }
}
