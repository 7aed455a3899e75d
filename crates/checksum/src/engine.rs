//! Bit-serial CRC engine.
//!
//! This is the canonical "source of truth" for CRC computation. It processes
//! one bit at a time, directly mirroring the shift-register definition, and
//! works for any [`CrcParams`]. The table-driven path in [`crate::table`] must
//! produce identical results.
//!
//! # Processing modes
//!
//! | Mode | Register walk | Per byte |
//! |------|---------------|----------|
//! | Normal (`refin = refout = false`) | MSB-first, `<< 1`, `poly` | `reg ^= b << (w - 8)` |
//! | Reflected (`refin = refout = true`) | LSB-first, `>> 1`, `reflect(poly)` | `reg ^= b` |
//! | Mixed (`refin != refout`) | MSB-first; input bytes and final register reflected separately | |
//!
//! The register always starts at `init` as given, so empty input yields
//! `init ^ xorout` for every parameter set. In reflected mode `init` is
//! therefore already in the register's LSB-first orientation.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crate::{
  params::{CrcParams, Mode, Width},
  reflect::{reflect, reflect8},
};

/// Compute the CRC of `data` in one shot.
///
/// ```
/// use checksum::{Algorithm, engine};
///
/// let params = Algorithm::Crc16Modbus.params();
/// assert_eq!(engine::compute(&params, b"123456789"), 0x4B37);
/// assert_eq!(engine::compute(&params, b""), 0xFFFF);
/// ```
#[inline]
#[must_use]
pub const fn compute(params: &CrcParams, data: &[u8]) -> u32 {
  finish(params, update(params, start(params), data))
}

/// Initial register state: `init` unchanged, in every mode.
#[inline]
#[must_use]
pub(crate) const fn start(params: &CrcParams) -> u32 {
  params.initial()
}

/// Feed `data` into a register obtained from [`start`] or a previous `update`.
#[inline]
#[must_use]
pub(crate) const fn update(params: &CrcParams, register: u32, data: &[u8]) -> u32 {
  match params.mode() {
    Mode::Reflected => update_reflected(params.polynomial_reflected(), register, data),
    Mode::Normal => update_normal(params.width(), params.polynomial(), register, data, false),
    Mode::Mixed => update_normal(params.width(), params.polynomial(), register, data, params.reflect_in()),
  }
}

/// Turn a register into the published checksum value.
#[inline]
#[must_use]
pub(crate) const fn finish(params: &CrcParams, register: u32) -> u32 {
  let register = match params.mode() {
    Mode::Mixed if params.reflect_out() => reflect(register, params.width()),
    _ => register,
  };
  (register ^ params.xor_out()) & params.width().mask()
}

/// LSB-first walk with a pre-reflected polynomial.
const fn update_reflected(poly_reflected: u32, mut crc: u32, data: &[u8]) -> u32 {
  let mut i: usize = 0;
  while i < data.len() {
    crc ^= data[i] as u32;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly_reflected } else { crc >> 1 };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// MSB-first walk. `reflect_bytes` reverses each input byte first (mixed mode).
const fn update_normal(width: Width, poly: u32, mut crc: u32, data: &[u8], reflect_bytes: bool) -> u32 {
  let mask = width.mask();
  let top = width.top_bit();
  let shift = width.bits() - 8;

  let mut i: usize = 0;
  while i < data.len() {
    let byte = if reflect_bytes { reflect8(data[i]) } else { data[i] };
    crc ^= (byte as u32) << shift;
    let mut bit: u32 = 0;
    while bit < 8 {
      crc = if crc & top != 0 { ((crc << 1) ^ poly) & mask } else { (crc << 1) & mask };
      bit += 1;
    }
    i += 1;
  }
  crc
}

/// Streaming CRC computation over any parameter set.
///
/// Feeding the same bytes in any chunking produces the same value as
/// [`compute`].
///
/// ```
/// use checksum::{Algorithm, Hasher};
///
/// let mut h = Hasher::new(Algorithm::Crc16Xmodem.params());
/// h.update(b"1234");
/// h.update(b"56789");
/// assert_eq!(h.finalize(), 0x31C3);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Hasher {
  params: CrcParams,
  state: u32,
}

impl Hasher {
  #[inline]
  #[must_use]
  pub const fn new(params: CrcParams) -> Self {
    Self {
      state: start(&params),
      params,
    }
  }

  #[inline]
  pub const fn update(&mut self, data: &[u8]) {
    self.state = update(&self.params, self.state, data);
  }

  /// The checksum of everything fed so far. Does not consume the hasher.
  #[inline]
  #[must_use]
  pub const fn finalize(&self) -> u32 {
    finish(&self.params, self.state)
  }

  #[inline]
  pub const fn reset(&mut self) {
    self.state = start(&self.params);
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }
}
