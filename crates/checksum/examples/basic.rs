//! Basic checksum usage: catalogue, streaming, hex in and out, custom parameters.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{
  Algorithm, ByteOrder, Catalog, CrcParams, Hasher, ParamRow, Width, append_checksum, compute_checksum, dispatch,
  list_algorithms,
};

fn main() -> Result<(), checksum::Error> {
  println!("=== Checksum Basic Examples ===\n");

  catalogue_examples();
  streaming_example();
  hex_examples()?;
  custom_parameters()?;
  Ok(())
}

/// Every built-in algorithm over the standard check input.
fn catalogue_examples() {
  println!("--- Built-in Catalogue ---\n");

  for width in Width::ALL {
    for name in list_algorithms(width) {
      // Names come from the catalogue, so lookup cannot fail here.
      if let Ok(crc) = dispatch(name, width, b"123456789") {
        let digits = width.bytes() * 2;
        println!("{name:<18} 0x{crc:0digits$X}");
      }
    }
  }

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let mut hasher = Hasher::new(Algorithm::Crc16Modbus.params());
  for chunk in [b"123".as_slice(), b"456", b"789"] {
    hasher.update(chunk);
  }
  let crc = hasher.finalize();
  println!("CRC-16/MODBUS (3 chunks): 0x{crc:04X}");
  assert_eq!(crc, Algorithm::Crc16Modbus.check());

  println!();
}

/// Hex text in, formatted checksum out.
fn hex_examples() -> Result<(), checksum::Error> {
  println!("--- Hex Input ---\n");

  let frame = "01 03 00 00 00 01";
  let le = compute_checksum("CRC16_MODBUS", Width::W16, frame, ByteOrder::Little)?;
  let be = compute_checksum("CRC16_MODBUS", Width::W16, frame, ByteOrder::Big)?;
  println!("{frame} -> {le} (little endian), {be} (big endian)");

  let framed = append_checksum("CRC16_MODBUS", Width::W16, frame, ByteOrder::Little)?;
  println!("framed:   {framed}");

  println!();
  Ok(())
}

/// Parameter sets outside the built-in catalogue.
fn custom_parameters() -> Result<(), checksum::Error> {
  println!("--- Custom Parameters ---\n");

  // Direct: any width/poly/init/reflection/xorout combination.
  let genibus = CrcParams::new(Width::W16, 0x1021, 0xFFFF, false, false, 0xFFFF)?;
  println!("CRC-16/GENIBUS: 0x{:04X}", checksum::engine::compute(&genibus, b"123456789"));

  // Ingested: validated rows become a named catalogue.
  let catalog = Catalog::from_rows([ParamRow {
    name: "CRC-8/CDMA2000".into(),
    width: 8,
    poly: 0x9B,
    init: 0xFF,
    ..ParamRow::default()
  }])?;
  let crc = catalog.dispatch("CRC-8/CDMA2000", Width::W8, b"123456789")?;
  println!("CRC-8/CDMA2000: 0x{crc:02X}");

  println!();
  Ok(())
}
