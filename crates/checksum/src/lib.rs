//! Parameterized CRC-8, CRC-16 and CRC-32 checksums.
//!
//! Every algorithm is described by the same six parameters (width,
//! polynomial, initial value, input/output reflection and final XOR) and
//! computed by one bit-serial engine. The named standards are catalogued in
//! [`Algorithm`] with compile-time lookup tables; arbitrary parameter sets can
//! be ingested at runtime through [`Catalog`].
//!
//! # Supported Algorithms
//!
//! | Width | Algorithms |
//! |-------|------------|
//! | 8 | `CRC8`, `CRC8_MAXIM`, `CRC8_ITU`, `CRC8_ROHC` |
//! | 16 | `CRC16_IBM`, `CRC16_MAXIM`, `CRC16_USB`, `CRC16_MODBUS`, `CRC16_CCITT_FALSE`, `CRC16_CCITT`, `CRC16_XMODEM`, `CRC16_X25`, `CRC16_DNP` |
//! | 32 | `CRC32_MPEG2`, `CRC32` |
//!
//! See [`Algorithm`] for the full parameter table.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Algorithm, ByteOrder, Hasher, Width, compute_checksum, dispatch};
//!
//! // By name, restricted to a width class
//! assert_eq!(dispatch("CRC-16/MODBUS", Width::W16, b"123456789"), Ok(0x4B37));
//!
//! // Hex in, formatted checksum out
//! let text = compute_checksum("CRC8", Width::W8, "01 02 03", ByteOrder::Little).unwrap();
//! assert_eq!(text, "48");
//!
//! // Streaming computation
//! let mut hasher = Hasher::new(Algorithm::Crc32.params());
//! hasher.update(b"1234");
//! hasher.update(b"56789");
//! assert_eq!(hasher.finalize(), Algorithm::Crc32.checksum(b"123456789"));
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. The engine, tables and catalogue work
//! without an allocator; hex parsing, formatting and [`Catalog`] need `alloc`:
//!
//! ```toml
//! [dependencies]
//! checksum = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod algorithm;
#[cfg(feature = "alloc")]
mod catalog;
pub mod codec;
mod dispatch;
pub mod engine;
mod error;
mod params;
mod reflect;
mod table;

pub use algorithm::Algorithm;
#[cfg(feature = "alloc")]
pub use catalog::{AlgorithmSpec, Catalog, ParamRow};
pub use codec::ByteOrder;
#[cfg(feature = "alloc")]
pub use dispatch::{append_checksum, compute_checksum};
pub use dispatch::{dispatch, list_algorithms};
pub use engine::Hasher;
pub use error::{Error, Field, HexError, HexErrorKind, SpecError, SpecErrorKind, UnknownAlgorithm};
pub use params::{CrcParams, Mode, Width};
pub use reflect::{reflect, reflect8, reflect16, reflect32};
pub use table::Table;
