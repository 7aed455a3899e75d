//! Built-in algorithm catalogue.
//!
//! Every supported standard is a variant of [`Algorithm`]; its parameters
//! live in a `const` table and its byte-at-a-time lookup table is generated at
//! compile time.
//!
//! | Ident | Name | Width | Poly | Init | RefIn/Out | XorOut | Check |
//! |-------|------|-------|------|------|-----------|--------|-------|
//! | `CRC8` | CRC-8 | 8 | 0x07 | 0x00 | false | 0x00 | 0xF4 |
//! | `CRC8_MAXIM` | CRC-8/MAXIM | 8 | 0x31 | 0x00 | true | 0x00 | 0xA1 |
//! | `CRC8_ITU` | CRC-8/ITU | 8 | 0x07 | 0x00 | false | 0x55 | 0xA1 |
//! | `CRC8_ROHC` | CRC-8/ROHC | 8 | 0x07 | 0xFF | true | 0x00 | 0xD0 |
//! | `CRC16_IBM` | CRC-16/IBM | 16 | 0x8005 | 0x0000 | true | 0x0000 | 0xBB3D |
//! | `CRC16_MAXIM` | CRC-16/MAXIM | 16 | 0x8005 | 0x0000 | true | 0xFFFF | 0x44C2 |
//! | `CRC16_USB` | CRC-16/USB | 16 | 0x8005 | 0xFFFF | true | 0xFFFF | 0xB4C8 |
//! | `CRC16_MODBUS` | CRC-16/MODBUS | 16 | 0x8005 | 0xFFFF | true | 0x0000 | 0x4B37 |
//! | `CRC16_CCITT_FALSE` | CRC-16/CCITT-FALSE | 16 | 0x1021 | 0xFFFF | false | 0x0000 | 0x29B1 |
//! | `CRC16_CCITT` | CRC-16/CCITT-TRUE | 16 | 0x1021 | 0x0000 | true | 0x0000 | 0x2189 |
//! | `CRC16_XMODEM` | CRC-16/XMODEM | 16 | 0x1021 | 0x0000 | false | 0x0000 | 0x31C3 |
//! | `CRC16_X25` | CRC-16/X25 | 16 | 0x1021 | 0xFFFF | true | 0xFFFF | 0x906E |
//! | `CRC16_DNP` | CRC-16/DNP | 16 | 0x3D65 | 0x0000 | true | 0xFFFF | 0xEA82 |
//! | `CRC32_MPEG2` | CRC-32/MPEG-2 | 32 | 0x04C11DB7 | 0xFFFFFFFF | false | 0x00000000 | 0x0376E6E7 |
//! | `CRC32` | CRC-32/WINRAR | 32 | 0x04C11DB7 | 0xFFFFFFFF | true | 0xFFFFFFFF | 0xCBF43926 |
//!
//! Names are matched case-insensitively, ignoring everything but letters and
//! digits, against the ident, the catalogue name and the aliases. `crc8`,
//! `CRC-16/MODBUS` and `crc16_modbus` all resolve.

// SAFETY: `Algorithm as usize` is always < COUNT; the discriminants are the
// positions in ENTRIES.
#![allow(clippy::indexing_slicing)]

use core::fmt;

use crate::{
  engine,
  error::UnknownAlgorithm,
  params::{CrcParams, Width},
  table::Table,
};

/// A supported CRC standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
  /// CRC-8 (SMBus): poly `0x07`, check `0xF4`.
  Crc8,
  /// CRC-8/MAXIM-DOW (1-Wire): reflected poly `0x31`, check `0xA1`.
  Crc8Maxim,
  /// CRC-8/I-432-1 (ITU ATM HEC): poly `0x07`, xorout `0x55`, check `0xA1`.
  Crc8Itu,
  /// CRC-8/ROHC: reflected poly `0x07`, init `0xFF`, check `0xD0`.
  Crc8Rohc,
  /// CRC-16/ARC: reflected poly `0x8005`, check `0xBB3D`.
  Crc16Ibm,
  /// CRC-16/MAXIM-DOW: reflected poly `0x8005`, xorout `0xFFFF`, check `0x44C2`.
  Crc16Maxim,
  /// CRC-16/USB: reflected poly `0x8005`, init and xorout `0xFFFF`, check `0xB4C8`.
  Crc16Usb,
  /// CRC-16/MODBUS: reflected poly `0x8005`, init `0xFFFF`, check `0x4B37`.
  Crc16Modbus,
  /// CRC-16/IBM-3740: poly `0x1021`, init `0xFFFF`, check `0x29B1`.
  Crc16CcittFalse,
  /// CRC-16/KERMIT (CCITT-TRUE): reflected poly `0x1021`, check `0x2189`.
  Crc16Ccitt,
  /// CRC-16/XMODEM: poly `0x1021`, check `0x31C3`.
  Crc16Xmodem,
  /// CRC-16/IBM-SDLC (X.25): reflected poly `0x1021`, init and xorout `0xFFFF`, check `0x906E`.
  Crc16X25,
  /// CRC-16/DNP: reflected poly `0x3D65`, xorout `0xFFFF`, check `0xEA82`.
  Crc16Dnp,
  /// CRC-32/MPEG-2: poly `0x04C11DB7`, init `0xFFFFFFFF`, check `0x0376E6E7`.
  Crc32Mpeg2,
  /// CRC-32/ISO-HDLC: reflected poly `0x04C11DB7`, init and xorout `0xFFFFFFFF`, check `0xCBF43926`.
  Crc32,
}

struct Entry {
  ident: &'static str,
  name: &'static str,
  aliases: &'static [&'static str],
  params: CrcParams,
  check: u32,
}

const fn params(width: Width, poly: u32, init: u32, reflected: bool, xor_out: u32) -> CrcParams {
  match CrcParams::new(width, poly as u64, init as u64, reflected, reflected, xor_out as u64) {
    Ok(params) => params,
    Err(_) => panic!("catalogue parameters exceed their width"),
  }
}

const ENTRIES: [Entry; Algorithm::COUNT] = [
  Entry {
    ident: "CRC8",
    name: "CRC-8",
    aliases: &["CRC-8/SMBUS"],
    params: params(Width::W8, 0x07, 0x00, false, 0x00),
    check: 0xF4,
  },
  Entry {
    ident: "CRC8_MAXIM",
    name: "CRC-8/MAXIM",
    aliases: &["CRC-8/MAXIM-DOW", "DOW-CRC"],
    params: params(Width::W8, 0x31, 0x00, true, 0x00),
    check: 0xA1,
  },
  Entry {
    ident: "CRC8_ITU",
    name: "CRC-8/ITU",
    aliases: &["CRC-8/I-432-1"],
    params: params(Width::W8, 0x07, 0x00, false, 0x55),
    check: 0xA1,
  },
  Entry {
    ident: "CRC8_ROHC",
    name: "CRC-8/ROHC",
    aliases: &[],
    params: params(Width::W8, 0x07, 0xFF, true, 0x00),
    check: 0xD0,
  },
  Entry {
    ident: "CRC16_IBM",
    name: "CRC-16/IBM",
    aliases: &["CRC-16/ARC", "CRC-16/LHA", "ARC"],
    params: params(Width::W16, 0x8005, 0x0000, true, 0x0000),
    check: 0xBB3D,
  },
  Entry {
    ident: "CRC16_MAXIM",
    name: "CRC-16/MAXIM",
    aliases: &["CRC-16/MAXIM-DOW"],
    params: params(Width::W16, 0x8005, 0x0000, true, 0xFFFF),
    check: 0x44C2,
  },
  Entry {
    ident: "CRC16_USB",
    name: "CRC-16/USB",
    aliases: &[],
    params: params(Width::W16, 0x8005, 0xFFFF, true, 0xFFFF),
    check: 0xB4C8,
  },
  Entry {
    ident: "CRC16_MODBUS",
    name: "CRC-16/MODBUS",
    aliases: &["MODBUS"],
    params: params(Width::W16, 0x8005, 0xFFFF, true, 0x0000),
    check: 0x4B37,
  },
  Entry {
    ident: "CRC16_CCITT_FALSE",
    name: "CRC-16/CCITT-FALSE",
    aliases: &["CRC-16/IBM-3740", "CRC-16/AUTOSAR"],
    params: params(Width::W16, 0x1021, 0xFFFF, false, 0x0000),
    check: 0x29B1,
  },
  Entry {
    ident: "CRC16_CCITT",
    name: "CRC-16/CCITT-TRUE",
    aliases: &["CRC-16/CCITT", "CRC16_CCITT_TRUE", "CRC-16/KERMIT", "KERMIT"],
    params: params(Width::W16, 0x1021, 0x0000, true, 0x0000),
    check: 0x2189,
  },
  Entry {
    ident: "CRC16_XMODEM",
    name: "CRC-16/XMODEM",
    aliases: &["CRC-16/ZMODEM", "CRC-16/ACORN", "XMODEM"],
    params: params(Width::W16, 0x1021, 0x0000, false, 0x0000),
    check: 0x31C3,
  },
  Entry {
    ident: "CRC16_X25",
    name: "CRC-16/X25",
    aliases: &["CRC-16/IBM-SDLC", "CRC-16/ISO-HDLC", "X-25"],
    params: params(Width::W16, 0x1021, 0xFFFF, true, 0xFFFF),
    check: 0x906E,
  },
  Entry {
    ident: "CRC16_DNP",
    name: "CRC-16/DNP",
    aliases: &[],
    params: params(Width::W16, 0x3D65, 0x0000, true, 0xFFFF),
    check: 0xEA82,
  },
  Entry {
    ident: "CRC32_MPEG2",
    name: "CRC-32/MPEG-2",
    aliases: &["CRC32_MPEG"],
    params: params(Width::W32, 0x04C1_1DB7, 0xFFFF_FFFF, false, 0x0000_0000),
    check: 0x0376_E6E7,
  },
  Entry {
    ident: "CRC32",
    name: "CRC-32/WINRAR",
    aliases: &["CRC32_WINRAR", "CRC-32", "CRC-32/ISO-HDLC", "PKZIP"],
    params: params(Width::W32, 0x04C1_1DB7, 0xFFFF_FFFF, true, 0xFFFF_FFFF),
    check: 0xCBF4_3926,
  },
];

static TABLES: [Table; Algorithm::COUNT] = {
  const EMPTY: Table = Table::new(ENTRIES[0].params);
  let mut tables = [EMPTY; Algorithm::COUNT];
  let mut i = 0;
  while i < Algorithm::COUNT {
    tables[i] = Table::new(ENTRIES[i].params);
    i += 1;
  }
  tables
};

/// Standard test input for CRC check values.
pub(crate) const CHECK_INPUT: &[u8] = b"123456789";

// Every catalogue entry must reproduce its published check value through both
// the bitwise engine and its table, and sit at its own discriminant. If any of
// these fail, the build fails.
const _: () = {
  let mut i = 0;
  while i < Algorithm::COUNT {
    let algorithm = Algorithm::ALL[i];
    assert!(algorithm as usize == i);
    let entry = &ENTRIES[i];
    assert!(engine::compute(&entry.params, CHECK_INPUT) == entry.check);
    assert!(Table::new(entry.params).checksum(CHECK_INPUT) == entry.check);
    i += 1;
  }
};

impl Algorithm {
  pub const COUNT: usize = 15;

  /// Every algorithm, grouped by width class in catalogue order.
  pub const ALL: [Self; Self::COUNT] = [
    Self::Crc8,
    Self::Crc8Maxim,
    Self::Crc8Itu,
    Self::Crc8Rohc,
    Self::Crc16Ibm,
    Self::Crc16Maxim,
    Self::Crc16Usb,
    Self::Crc16Modbus,
    Self::Crc16CcittFalse,
    Self::Crc16Ccitt,
    Self::Crc16Xmodem,
    Self::Crc16X25,
    Self::Crc16Dnp,
    Self::Crc32Mpeg2,
    Self::Crc32,
  ];

  /// Short identifier, e.g. `CRC16_MODBUS`.
  #[inline]
  #[must_use]
  pub const fn ident(self) -> &'static str {
    ENTRIES[self as usize].ident
  }

  /// Catalogue name, e.g. `CRC-16/MODBUS`.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    ENTRIES[self as usize].name
  }

  /// Other names this algorithm is known by.
  #[inline]
  #[must_use]
  pub const fn aliases(self) -> &'static [&'static str] {
    ENTRIES[self as usize].aliases
  }

  #[inline]
  #[must_use]
  pub const fn params(self) -> CrcParams {
    ENTRIES[self as usize].params
  }

  #[inline]
  #[must_use]
  pub const fn width(self) -> Width {
    ENTRIES[self as usize].params.width()
  }

  /// Published CRC of the ASCII string `"123456789"`.
  #[inline]
  #[must_use]
  pub const fn check(self) -> u32 {
    ENTRIES[self as usize].check
  }

  /// The compile-time lookup table for this algorithm.
  #[inline]
  #[must_use]
  pub fn table(self) -> &'static Table {
    &TABLES[self as usize]
  }

  /// Compute the checksum of `data` using the precomputed table.
  ///
  /// ```
  /// use checksum::Algorithm;
  ///
  /// assert_eq!(Algorithm::Crc16Modbus.checksum(b"123456789"), 0x4B37);
  /// assert_eq!(Algorithm::Crc32Mpeg2.checksum(b"123456789"), 0x0376_E6E7);
  /// ```
  #[inline]
  #[must_use]
  pub fn checksum(self, data: &[u8]) -> u32 {
    self.table().checksum(data)
  }

  /// Algorithms of one width class, in catalogue order.
  pub fn for_width(width: Width) -> impl Iterator<Item = Self> {
    Self::ALL.into_iter().filter(move |a| a.width() == width)
  }

  /// Whether `name` refers to this algorithm.
  #[must_use]
  pub fn matches(self, name: &str) -> bool {
    names_match(name, self.ident())
      || names_match(name, self.name())
      || self.aliases().iter().any(|alias| names_match(name, alias))
  }

  /// Resolve `name` within one width class.
  ///
  /// A name that exists only in another class is still unknown here.
  ///
  /// ```
  /// use checksum::{Algorithm, Width};
  ///
  /// assert_eq!(Algorithm::lookup("crc-16/modbus", Width::W16), Ok(Algorithm::Crc16Modbus));
  /// assert!(Algorithm::lookup("CRC16_MODBUS", Width::W8).is_err());
  /// ```
  pub fn lookup(name: &str, width: Width) -> Result<Self, UnknownAlgorithm> {
    Self::for_width(width)
      .find(|a| a.matches(name))
      .ok_or(UnknownAlgorithm::new(width))
  }

  /// Resolve `name` in any width class.
  #[must_use]
  pub fn find(name: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|a| a.matches(name))
  }
}

impl fmt::Display for Algorithm {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

fn normalized(name: &str) -> impl Iterator<Item = char> + '_ {
  name.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_uppercase())
}

/// Case-insensitive comparison over letters and digits only.
///
/// A name with no letters or digits matches nothing.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
  normalized(a).next().is_some() && normalized(a).eq(normalized(b))
}
