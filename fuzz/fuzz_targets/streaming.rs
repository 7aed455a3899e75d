//! Fuzz target for the streaming API.
//!
//! Tests that arbitrary sequences of update calls produce correct results.

#![no_main]

use arbitrary::Arbitrary;
use checksum::{Algorithm, Hasher};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  algorithm: u8,
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let algorithm = Algorithm::ALL[usize::from(input.algorithm) % Algorithm::COUNT];
  let data = &input.data;
  let expected = algorithm.checksum(data);

  let table = algorithm.table();
  let mut hasher = Hasher::new(algorithm.params());
  let mut register = table.init();
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.update(&data[offset..end]);
    register = table.update(register, &data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize(), expected, "{algorithm} streaming mismatch");
  assert_eq!(table.finalize(register), expected, "{algorithm} table streaming mismatch");
});
