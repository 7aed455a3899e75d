//! Const-fn CRC lookup tables.
//!
//! A [`Table`] precomputes the register update for all 256 byte values, so
//! the hot loop processes one byte per step instead of one bit. Tables are
//! built with `const fn` and for the catalogued algorithms are embedded
//! directly in the binary (see [`Algorithm::table`](crate::Algorithm::table)).
//!
//! Results are always identical to [`engine::compute`](crate::engine::compute);
//! the bitwise engine is the reference.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256)
// or indices masked with 0xFF. Clippy cannot prove this in const fn contexts.
#![allow(clippy::indexing_slicing)]

use crate::{
  engine,
  params::{CrcParams, Mode},
  reflect::reflect8,
};

/// A 256-entry byte-at-a-time CRC table for one parameter set.
#[derive(Clone, Debug)]
pub struct Table {
  params: CrcParams,
  entries: [u32; 256],
}

impl Table {
  /// Build the table for `params`.
  ///
  /// ```
  /// use checksum::{Algorithm, Table};
  ///
  /// const X25: Table = Table::new(Algorithm::Crc16X25.params());
  /// assert_eq!(X25.checksum(b"123456789"), 0x906E);
  /// ```
  #[must_use]
  pub const fn new(params: CrcParams) -> Self {
    let mut entries = [0u32; 256];
    let mut i = 0usize;
    while i < 256 {
      entries[i] = match params.mode() {
        Mode::Reflected => reflected_entry(params.polynomial_reflected(), i as u8),
        Mode::Normal | Mode::Mixed => normal_entry(&params, i as u8),
      };
      i += 1;
    }
    Self { params, entries }
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u32; 256] {
    &self.entries
  }

  /// Compute the CRC of `data` in one shot.
  #[inline]
  #[must_use]
  pub const fn checksum(&self, data: &[u8]) -> u32 {
    self.finalize(self.update(self.init(), data))
  }

  /// Initial register value for streaming use.
  ///
  /// ```
  /// use checksum::Algorithm;
  ///
  /// let table = Algorithm::Crc32.table();
  /// let mut register = table.init();
  /// register = table.update(register, b"1234");
  /// register = table.update(register, b"56789");
  /// assert_eq!(table.finalize(register), 0xCBF4_3926);
  /// ```
  #[inline]
  #[must_use]
  pub const fn init(&self) -> u32 {
    engine::start(&self.params)
  }

  /// Final output reflection and XOR.
  #[inline]
  #[must_use]
  pub const fn finalize(&self, register: u32) -> u32 {
    engine::finish(&self.params, register)
  }

  /// Feed `data` into `register`, one byte per step.
  #[must_use]
  pub const fn update(&self, mut crc: u32, data: &[u8]) -> u32 {
    let width = self.params.width();
    let mut i = 0usize;
    match self.params.mode() {
      Mode::Reflected => {
        while i < data.len() {
          let index = ((crc ^ data[i] as u32) & 0xFF) as usize;
          crc = (crc >> 8) ^ self.entries[index];
          i += 1;
        }
      }
      Mode::Normal | Mode::Mixed => {
        let reflect_bytes = self.params.reflect_in();
        let shift = width.bits() - 8;
        let mask = width.mask();
        while i < data.len() {
          let byte = if reflect_bytes { reflect8(data[i]) } else { data[i] };
          let index = (((crc >> shift) ^ byte as u32) & 0xFF) as usize;
          crc = ((crc << 8) ^ self.entries[index]) & mask;
          i += 1;
        }
      }
    }
    crc
  }
}

/// One LSB-first table entry.
const fn reflected_entry(poly_reflected: u32, index: u8) -> u32 {
  let mut crc = index as u32;
  let mut i = 0;
  while i < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly_reflected } else { crc >> 1 };
    i += 1;
  }
  crc
}

/// One MSB-first table entry, aligned to the register width.
const fn normal_entry(params: &CrcParams, index: u8) -> u32 {
  let width = params.width();
  let mask = width.mask();
  let top = width.top_bit();
  let poly = params.polynomial();
  let mut crc = (index as u32) << (width.bits() - 8);
  let mut i = 0;
  while i < 8 {
    crc = if crc & top != 0 { ((crc << 1) ^ poly) & mask } else { (crc << 1) & mask };
    i += 1;
  }
  crc
}
