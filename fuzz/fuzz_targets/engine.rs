//! Fuzz target for the table fast path.
//!
//! For arbitrary parameter sets, the lookup table must agree with the
//! bitwise engine, and the result must fit the register width.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{CrcParams, Table, Width, engine};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  poly: u32,
  init: u32,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u32,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let width = Width::ALL[usize::from(input.width) % Width::ALL.len()];
  let mask = width.mask();
  let Ok(params) = CrcParams::new(
    width,
    u64::from(input.poly & mask),
    u64::from(input.init & mask),
    input.reflect_in,
    input.reflect_out,
    u64::from(input.xor_out & mask),
  ) else {
    panic!("masked parameters rejected for width {width}");
  };

  let bitwise = engine::compute(&params, &input.data);
  assert_eq!(bitwise & !mask, 0, "result wider than register");
  assert_eq!(Table::new(params).checksum(&input.data), bitwise, "table mismatch for {params:?}");
});
