//! CRC algorithm parameters.
//!
//! This module defines the parameters for CRC algorithms following the
//! conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use core::fmt;

use crate::{
  error::{Field, SpecError, SpecErrorKind},
  reflect::reflect,
};

/// Register width of a CRC algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Width {
  /// 8-bit register.
  W8,
  /// 16-bit register.
  W16,
  /// 32-bit register.
  W32,
}

impl Width {
  /// All supported widths, narrowest first.
  pub const ALL: [Self; 3] = [Self::W8, Self::W16, Self::W32];

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u32 {
    match self {
      Self::W8 => 8,
      Self::W16 => 16,
      Self::W32 => 32,
    }
  }

  /// Width in bytes; also the number of bytes a checksum occupies on the wire.
  #[inline]
  #[must_use]
  pub const fn bytes(self) -> usize {
    match self {
      Self::W8 => 1,
      Self::W16 => 2,
      Self::W32 => 4,
    }
  }

  /// Mask with the low `bits()` bits set.
  #[inline]
  #[must_use]
  pub const fn mask(self) -> u32 {
    match self {
      Self::W8 => 0xFF,
      Self::W16 => 0xFFFF,
      Self::W32 => 0xFFFF_FFFF,
    }
  }

  /// The register's most significant bit.
  #[inline]
  #[must_use]
  pub const fn top_bit(self) -> u32 {
    1 << (self.bits() - 1)
  }

  /// Width for a bit count, if supported.
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u32) -> Option<Self> {
    match bits {
      8 => Some(Self::W8),
      16 => Some(Self::W16),
      32 => Some(Self::W32),
      _ => None,
    }
  }
}

impl TryFrom<u32> for Width {
  type Error = SpecError;

  fn try_from(bits: u32) -> Result<Self, Self::Error> {
    Self::from_bits(bits).ok_or(SpecError::new(SpecErrorKind::UnsupportedWidth(bits)))
  }
}

impl fmt::Display for Width {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.bits())
  }
}

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC algorithm
/// in the Rocksoft model:
///
/// - `width`: Number of bits in the CRC (8, 16 or 32)
/// - `polynomial`: The generator polynomial, normal form, without the implicit high bit
/// - `initial`: Initial value for the CRC register
/// - `reflect_in`: If true, each input byte is processed LSB-first
/// - `reflect_out`: If true, the final register is reflected before the XOR
/// - `xor_out`: Value to XOR with the final CRC
///
/// Every value is guaranteed to fit in `width` bits; the only way to build a
/// `CrcParams` is through [`CrcParams::new`], which checks this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  width: Width,
  polynomial: u32,
  initial: u32,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u32,
}

impl CrcParams {
  /// Validate and build a parameter set.
  ///
  /// Values are taken as `u64` so that out-of-range inputs are reported
  /// instead of silently truncated.
  ///
  /// ```
  /// use checksum::{CrcParams, Width};
  ///
  /// let modbus = CrcParams::new(Width::W16, 0x8005, 0xFFFF, true, true, 0x0000).unwrap();
  /// assert_eq!(modbus.polynomial_reflected(), 0xA001);
  ///
  /// assert!(CrcParams::new(Width::W8, 0x107, 0, false, false, 0).is_err());
  /// ```
  pub const fn new(
    width: Width,
    polynomial: u64,
    initial: u64,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: u64,
  ) -> Result<Self, SpecError> {
    let limit = width.mask() as u64;
    if polynomial > limit {
      return Err(overflow(Field::Polynomial, polynomial, width));
    }
    if initial > limit {
      return Err(overflow(Field::Initial, initial, width));
    }
    if xor_out > limit {
      return Err(overflow(Field::XorOut, xor_out, width));
    }
    Ok(Self {
      width,
      polynomial: polynomial as u32,
      initial: initial as u32,
      reflect_in,
      reflect_out,
      xor_out: xor_out as u32,
    })
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.width
  }

  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u32 {
    self.polynomial
  }

  #[inline]
  #[must_use]
  pub const fn initial(&self) -> u32 {
    self.initial
  }

  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.reflect_in
  }

  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.reflect_out
  }

  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> u32 {
    self.xor_out
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u32 {
    reflect(self.polynomial, self.width)
  }

  /// How the engine walks the register for these parameters.
  #[inline]
  #[must_use]
  pub const fn mode(&self) -> Mode {
    match (self.reflect_in, self.reflect_out) {
      (true, true) => Mode::Reflected,
      (false, false) => Mode::Normal,
      _ => Mode::Mixed,
    }
  }
}

/// Register walk direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
  /// `refin = refout = false`: MSB-first, left shifts.
  Normal,
  /// `refin = refout = true`: LSB-first, right shifts with the reflected polynomial.
  Reflected,
  /// `refin != refout`: MSB-first core, input and output reflected independently.
  Mixed,
}

const fn overflow(field: Field, value: u64, width: Width) -> SpecError {
  SpecError::new(SpecErrorKind::Overflow { field, value, width })
}
