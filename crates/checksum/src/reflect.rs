//! Bit reflection (bit-order reversal) within 8-, 16- and 32-bit words.
//!
//! Reflected CRCs process each byte least-significant bit first. Rather than
//! reflecting every input byte and the final register, the engine reflects
//! the polynomial once and shifts the register right. These helpers produce
//! that reflected polynomial.

use crate::params::Width;

/// Reverse the bit order of the lower `width` bits of `value`.
///
/// Bit `i` of the input becomes bit `width - 1 - i` of the output. Bits at or
/// above `width` are ignored.
///
/// ```
/// use checksum::{Width, reflect};
///
/// assert_eq!(reflect(0x8005, Width::W16), 0xA001);
/// assert_eq!(reflect(0x04C1_1DB7, Width::W32), 0xEDB8_8320);
/// ```
#[inline]
#[must_use]
pub const fn reflect(value: u32, width: Width) -> u32 {
  let bits = width.bits();
  let mut result = 0u32;
  let mut i = 0u32;
  while i < bits {
    if (value >> i) & 1 != 0 {
      result |= 1 << (bits - 1 - i);
    }
    i += 1;
  }
  result
}

/// Reverse the bit order of a byte (`0x12` becomes `0x48`).
#[inline]
#[must_use]
pub const fn reflect8(value: u8) -> u8 {
  reflect(value as u32, Width::W8) as u8
}

/// Reverse the bit order of a 16-bit word.
#[inline]
#[must_use]
pub const fn reflect16(value: u16) -> u16 {
  reflect(value as u32, Width::W16) as u16
}

/// Reverse the bit order of a 32-bit word.
#[inline]
#[must_use]
pub const fn reflect32(value: u32) -> u32 {
  reflect(value, Width::W32)
}
