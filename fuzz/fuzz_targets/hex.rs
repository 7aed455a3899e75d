//! Fuzz target for the hex codec and the name-based entry points.
//!
//! Arbitrary text must never panic. Whatever parses must re-encode to text
//! that parses back to the same bytes.

#![no_main]

use checksum::{
  Algorithm, ByteOrder, Error, compute_checksum,
  codec::{encode_hex, normalize_hex, parse_hex},
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
  let parsed = parse_hex(text);

  if let Ok(bytes) = &parsed {
    for spaced in [false, true] {
      let encoded = encode_hex(bytes, spaced);
      assert_eq!(parse_hex(&encoded).as_ref(), Ok(bytes));
      assert_eq!(normalize_hex(text, spaced).as_deref(), Ok(encoded.as_str()));
    }
  }

  for algorithm in Algorithm::ALL {
    match compute_checksum(algorithm.ident(), algorithm.width(), text, ByteOrder::Big) {
      Ok(formatted) => {
        let Ok(bytes) = &parsed else {
          panic!("computed over unparseable input");
        };
        let value = algorithm.checksum(bytes);
        assert_eq!(parse_hex(&formatted), Ok(ByteOrder::Big.bytes(value, algorithm.width()).collect()));
      }
      Err(Error::MalformedHexInput(e)) => assert_eq!(parsed.as_ref().err(), Some(&e)),
      Err(other) => panic!("unexpected error {other:?}"),
    }
  }
});
