//! Name-based checksum requests against the built-in catalogue.
//!
//! These are the entry points a presentation layer calls: list what is
//! available for a width class, then turn hex text into a formatted
//! checksum. Algorithm names are resolved before any input is parsed or any
//! CRC is computed.

#[cfg(feature = "alloc")]
use alloc::string::String;

use crate::{algorithm::Algorithm, engine, error::UnknownAlgorithm, params::Width};
#[cfg(feature = "alloc")]
use crate::{
  codec::{ByteOrder, append_hex, format_hex, parse_hex},
  error::Error,
};

/// Idents of the algorithms in one width class, in catalogue order.
///
/// ```
/// use checksum::{Width, list_algorithms};
///
/// let names: Vec<_> = list_algorithms(Width::W8).collect();
/// assert_eq!(names, ["CRC8", "CRC8_MAXIM", "CRC8_ITU", "CRC8_ROHC"]);
/// ```
pub fn list_algorithms(width: Width) -> impl Iterator<Item = &'static str> {
  Algorithm::for_width(width).map(Algorithm::ident)
}

/// Compute the checksum of `data` with the algorithm called `name`.
///
/// The result is exactly what the bitwise engine produces for that
/// algorithm's parameters.
///
/// ```
/// use checksum::{Width, dispatch};
///
/// assert_eq!(dispatch("CRC16_MODBUS", Width::W16, b"123456789"), Ok(0x4B37));
/// assert!(dispatch("CRC16_MODBUS", Width::W32, b"123456789").is_err());
/// ```
pub fn dispatch(name: &str, width: Width, data: &[u8]) -> Result<u32, UnknownAlgorithm> {
  let algorithm = Algorithm::lookup(name, width)?;
  Ok(engine::compute(&algorithm.params(), data))
}

/// Parse `hex_text`, compute its checksum, and format the result.
///
/// ```
/// use checksum::{ByteOrder, Width, compute_checksum};
///
/// let le = compute_checksum("CRC16_MODBUS", Width::W16, "01 03 00 00 00 01", ByteOrder::Little).unwrap();
/// assert_eq!(le, "840A");
/// ```
#[cfg(feature = "alloc")]
pub fn compute_checksum(name: &str, width: Width, hex_text: &str, order: ByteOrder) -> Result<String, Error> {
  let algorithm = Algorithm::lookup(name, width)?;
  let value = checksum_hex(&algorithm.params(), hex_text)?;
  Ok(format_hex(value, width, order))
}

/// Like [`compute_checksum`], but returns `hex_text` with the checksum appended.
///
/// Layout follows [`append_hex`]: spaced if whitespace separates digits
/// inside the text, compact otherwise.
///
/// ```
/// use checksum::{ByteOrder, Width, append_checksum};
///
/// assert_eq!(append_checksum("CRC8", Width::W8, "01 02 03", ByteOrder::Little).unwrap(), "01 02 03 48");
/// assert_eq!(append_checksum("CRC8", Width::W8, "010203", ByteOrder::Little).unwrap(), "01020348");
/// ```
#[cfg(feature = "alloc")]
pub fn append_checksum(name: &str, width: Width, hex_text: &str, order: ByteOrder) -> Result<String, Error> {
  let algorithm = Algorithm::lookup(name, width)?;
  let value = checksum_hex(&algorithm.params(), hex_text)?;
  Ok(append_hex(hex_text, value, width, order))
}

#[cfg(feature = "alloc")]
pub(crate) fn checksum_hex(params: &crate::params::CrcParams, hex_text: &str) -> Result<u32, Error> {
  let data = parse_hex(hex_text)?;
  Ok(engine::compute(params, &data))
}
