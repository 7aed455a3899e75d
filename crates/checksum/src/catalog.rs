//! Runtime algorithm catalogue built from ingested parameter rows.
//!
//! A configuration loader (spreadsheet, JSON, whatever the host uses) hands
//! over plain [`ParamRow`]s; [`Catalog::from_rows`] validates every row and
//! rejects the whole table on the first bad one. Nothing is truncated.
//!
//! ```
//! use checksum::{ByteOrder, Catalog, ParamRow, Width};
//!
//! let rows = vec![ParamRow {
//!   name: "CRC-16/GENIBUS".into(),
//!   width: 16,
//!   poly: 0x1021,
//!   init: 0xFFFF,
//!   ref_in: false,
//!   ref_out: false,
//!   xor_out: 0xFFFF,
//!   aliases: vec!["CRC-16/EPC".into()],
//! }];
//! let catalog = Catalog::from_rows(rows).unwrap();
//! assert_eq!(catalog.dispatch("crc-16/epc", Width::W16, b"123456789"), Ok(0xD64E));
//! assert_eq!(
//!   catalog.compute_checksum("CRC-16/GENIBUS", Width::W16, "31 32 33 34 35 36 37 38 39", ByteOrder::Big).unwrap(),
//!   "D64E"
//! );
//! ```

use alloc::{string::String, vec::Vec};

use crate::{
  algorithm::{Algorithm, names_match},
  codec::{ByteOrder, append_hex, format_hex},
  dispatch::checksum_hex,
  engine,
  error::{Error, SpecError, SpecErrorKind, UnknownAlgorithm},
  params::{CrcParams, Width},
};

/// One row of an external parameter table.
///
/// Numeric fields are wider than any register so out-of-range values can be
/// rejected instead of truncated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ParamRow {
  pub name: String,
  pub width: u32,
  pub poly: u64,
  pub init: u64,
  pub ref_in: bool,
  pub ref_out: bool,
  pub xor_out: u64,
  #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
  pub aliases: Vec<String>,
}

/// A named, validated parameter set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmSpec {
  name: String,
  aliases: Vec<String>,
  params: CrcParams,
}

impl AlgorithmSpec {
  #[inline]
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[inline]
  #[must_use]
  pub fn aliases(&self) -> &[String] {
    &self.aliases
  }

  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> Width {
    self.params.width()
  }

  /// Whether `name` refers to this algorithm (same rules as the built-in catalogue).
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    names_match(name, &self.name) || self.aliases.iter().any(|alias| names_match(name, alias))
  }

  fn names(&self) -> impl Iterator<Item = &str> {
    core::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
  }
}

impl TryFrom<ParamRow> for AlgorithmSpec {
  type Error = SpecError;

  fn try_from(row: ParamRow) -> Result<Self, Self::Error> {
    if !row.name.chars().any(|c| c.is_ascii_alphanumeric()) {
      return Err(SpecError::new(SpecErrorKind::EmptyName));
    }
    let width = Width::try_from(row.width)?;
    let params = CrcParams::new(width, row.poly, row.init, row.ref_in, row.ref_out, row.xor_out)?;
    Ok(Self {
      name: row.name,
      aliases: row.aliases,
      params,
    })
  }
}

impl From<&AlgorithmSpec> for ParamRow {
  fn from(spec: &AlgorithmSpec) -> Self {
    let p = spec.params;
    Self {
      name: spec.name.clone(),
      width: p.width().bits(),
      poly: u64::from(p.polynomial()),
      init: u64::from(p.initial()),
      ref_in: p.reflect_in(),
      ref_out: p.reflect_out(),
      xor_out: u64::from(p.xor_out()),
      aliases: spec.aliases.clone(),
    }
  }
}

impl From<Algorithm> for AlgorithmSpec {
  fn from(algorithm: Algorithm) -> Self {
    let mut aliases = Vec::with_capacity(algorithm.aliases().len() + 1);
    aliases.push(String::from(algorithm.name()));
    aliases.extend(algorithm.aliases().iter().map(|&a| String::from(a)));
    Self {
      name: String::from(algorithm.ident()),
      aliases,
      params: algorithm.params(),
    }
  }
}

/// An immutable, validated set of algorithms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
  specs: Vec<AlgorithmSpec>,
}

impl Catalog {
  /// The built-in algorithms, in catalogue order.
  #[must_use]
  pub fn builtin() -> Self {
    Self {
      specs: Algorithm::ALL.into_iter().map(AlgorithmSpec::from).collect(),
    }
  }

  /// Validate `rows` and build a catalogue.
  ///
  /// Fails on the first invalid row; the error carries its zero-based index.
  /// Two rows may share a name only if they are in different width classes.
  pub fn from_rows<I>(rows: I) -> Result<Self, SpecError>
  where
    I: IntoIterator<Item = ParamRow>,
  {
    let mut specs: Vec<AlgorithmSpec> = Vec::new();
    for (index, row) in rows.into_iter().enumerate() {
      let spec = AlgorithmSpec::try_from(row).map_err(|e| e.at_row(index))?;
      let clash = specs
        .iter()
        .filter(|existing| existing.width() == spec.width())
        .any(|existing| spec.names().any(|name| existing.matches(name)));
      if clash {
        return Err(SpecError::new(SpecErrorKind::Duplicate { width: spec.width() }).at_row(index));
      }
      specs.push(spec);
    }
    Ok(Self { specs })
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.specs.len()
  }

  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.specs.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &AlgorithmSpec> {
    self.specs.iter()
  }

  /// Names of the algorithms in one width class, in table order.
  pub fn names(&self, width: Width) -> impl Iterator<Item = &str> {
    self.specs.iter().filter(move |s| s.width() == width).map(AlgorithmSpec::name)
  }

  pub fn lookup(&self, name: &str, width: Width) -> Result<&AlgorithmSpec, UnknownAlgorithm> {
    self
      .specs
      .iter()
      .filter(|s| s.width() == width)
      .find(|s| s.matches(name))
      .ok_or(UnknownAlgorithm::new(width))
  }

  pub fn dispatch(&self, name: &str, width: Width, data: &[u8]) -> Result<u32, UnknownAlgorithm> {
    let spec = self.lookup(name, width)?;
    Ok(engine::compute(spec.params(), data))
  }

  pub fn compute_checksum(&self, name: &str, width: Width, hex_text: &str, order: ByteOrder) -> Result<String, Error> {
    let spec = self.lookup(name, width)?;
    let value = checksum_hex(spec.params(), hex_text)?;
    Ok(format_hex(value, width, order))
  }

  pub fn append_checksum(&self, name: &str, width: Width, hex_text: &str, order: ByteOrder) -> Result<String, Error> {
    let spec = self.lookup(name, width)?;
    let value = checksum_hex(spec.params(), hex_text)?;
    Ok(append_hex(hex_text, value, width, order))
  }
}

impl<'a> IntoIterator for &'a Catalog {
  type Item = &'a AlgorithmSpec;
  type IntoIter = core::slice::Iter<'a, AlgorithmSpec>;

  fn into_iter(self) -> Self::IntoIter {
    self.specs.iter()
  }
}

#[cfg(test)]
mod tests {
  use alloc::{string::ToString, vec};

  use super::*;
  use crate::error::Field;

  fn row(name: &str, width: u32, poly: u64, init: u64, reflected: bool, xor_out: u64) -> ParamRow {
    ParamRow {
      name: name.to_string(),
      width,
      poly,
      init,
      ref_in: reflected,
      ref_out: reflected,
      xor_out,
      aliases: vec![],
    }
  }

  #[test]
  fn builtin_mirrors_enum() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), Algorithm::COUNT);
    for a in Algorithm::ALL {
      let spec = catalog.lookup(a.name(), a.width()).unwrap();
      assert_eq!(spec.name(), a.ident());
      assert_eq!(catalog.dispatch(a.ident(), a.width(), b"123456789"), Ok(a.check()));
    }
    assert!(catalog.names(Width::W8).eq(["CRC8", "CRC8_MAXIM", "CRC8_ITU", "CRC8_ROHC"]));
  }

  #[test]
  fn builtin_rows_round_trip() {
    let rows: Vec<ParamRow> = Catalog::builtin().iter().map(ParamRow::from).collect();
    assert_eq!(Catalog::from_rows(rows).unwrap(), Catalog::builtin());
  }

  #[test]
  fn rejects_overflowing_row_with_index() {
    let rows = vec![
      row("CRC-8", 8, 0x07, 0, false, 0),
      row("CRC-8/BAD", 8, 0x107, 0, false, 0),
      row("CRC-8/LATER", 8, 0x07, 0, false, 0),
    ];
    let err = Catalog::from_rows(rows).unwrap_err();
    assert_eq!(err.row(), Some(1));
    assert_eq!(
      err.kind(),
      SpecErrorKind::Overflow {
        field: Field::Polynomial,
        value: 0x107,
        width: Width::W8
      }
    );
  }

  #[test]
  fn rejects_unsupported_width_and_empty_name() {
    let err = Catalog::from_rows([row("CRC-24", 24, 0x864CFB, 0xB704CE, false, 0)]).unwrap_err();
    assert_eq!(err.kind(), SpecErrorKind::UnsupportedWidth(24));
    assert_eq!(err.row(), Some(0));

    let err = Catalog::from_rows([row("  / ", 8, 0x07, 0, false, 0)]).unwrap_err();
    assert_eq!(err.kind(), SpecErrorKind::EmptyName);
  }

  #[test]
  fn rejects_duplicates_within_a_width_class_only() {
    let err = Catalog::from_rows([row("CRC-X", 8, 0x07, 0, false, 0), row("crc_x", 8, 0x31, 0, true, 0)]).unwrap_err();
    assert_eq!(err.kind(), SpecErrorKind::Duplicate { width: Width::W8 });
    assert_eq!(err.row(), Some(1));

    let ok = Catalog::from_rows([row("CRC-X", 8, 0x07, 0, false, 0), row("CRC-X", 16, 0x1021, 0, false, 0)]).unwrap();
    assert_eq!(ok.len(), 2);
    assert_eq!(ok.dispatch("CRC-X", Width::W16, b"123456789"), Ok(0x31C3));
  }

  #[test]
  fn unknown_names_fail_without_computing() {
    let catalog = Catalog::from_rows([row("ONLY", 16, 0x8005, 0xFFFF, true, 0)]).unwrap();
    assert_eq!(catalog.dispatch("OTHER", Width::W16, b"").unwrap_err().width(), Width::W16);
    let err = catalog.append_checksum("OTHER", Width::W16, "not hex", ByteOrder::Big).unwrap_err();
    assert!(matches!(err, Error::UnknownAlgorithm(_)));
  }

  #[test]
  fn ingested_rows_compute_like_builtins() {
    let catalog = Catalog::from_rows([row("MODBUS-ROW", 16, 0x8005, 0xFFFF, true, 0)]).unwrap();
    assert_eq!(
      catalog.append_checksum("modbus-row", Width::W16, "01 03 00 00 00 01", ByteOrder::Little).unwrap(),
      "01 03 00 00 00 01 84 0A"
    );
    assert!(catalog.names(Width::W32).next().is_none());
  }
}
