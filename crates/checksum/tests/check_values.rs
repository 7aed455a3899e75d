//! Published check values and differential tests against the `crc` crate.

use checksum::{Algorithm, CrcParams, Hasher, Table, Width, dispatch, engine, list_algorithms};

const CHECK_INPUT: &[u8] = b"123456789";

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

#[test]
fn published_check_values() {
  let expected: [(&str, Width, u32); 15] = [
    ("CRC8", Width::W8, 0xF4),
    ("CRC8_MAXIM", Width::W8, 0xA1),
    ("CRC8_ITU", Width::W8, 0xA1),
    ("CRC8_ROHC", Width::W8, 0xD0),
    ("CRC16_IBM", Width::W16, 0xBB3D),
    ("CRC16_MAXIM", Width::W16, 0x44C2),
    ("CRC16_USB", Width::W16, 0xB4C8),
    ("CRC16_MODBUS", Width::W16, 0x4B37),
    ("CRC16_CCITT_FALSE", Width::W16, 0x29B1),
    ("CRC16_CCITT", Width::W16, 0x2189),
    ("CRC16_XMODEM", Width::W16, 0x31C3),
    ("CRC16_X25", Width::W16, 0x906E),
    ("CRC16_DNP", Width::W16, 0xEA82),
    ("CRC32_MPEG2", Width::W32, 0x0376_E6E7),
    ("CRC32", Width::W32, 0xCBF4_3926),
  ];

  for (name, width, check) in expected {
    assert_eq!(dispatch(name, width, CHECK_INPUT), Ok(check), "{name}");
    let algorithm = Algorithm::lookup(name, width).unwrap();
    assert_eq!(algorithm.check(), check, "{name}");
    assert_eq!(algorithm.checksum(CHECK_INPUT), check, "{name}");
  }

  let listed: usize = Width::ALL.into_iter().map(|w| list_algorithms(w).count()).sum();
  assert_eq!(listed, expected.len());
}

#[test]
fn empty_input_is_init_xor_xorout() {
  for algorithm in Algorithm::ALL {
    let p = algorithm.params();
    let expected = p.initial() ^ p.xor_out();
    assert_eq!(engine::compute(&p, &[]), expected, "{algorithm}");
    assert_eq!(algorithm.checksum(&[]), expected, "{algorithm}");
    assert_eq!(Hasher::new(p).finalize(), expected, "{algorithm}");
  }
}

#[test]
fn aliases_resolve_to_the_same_algorithm() {
  for (name, width, algorithm) in [
    ("CRC-16/ARC", Width::W16, Algorithm::Crc16Ibm),
    ("crc-16/kermit", Width::W16, Algorithm::Crc16Ccitt),
    ("CRC-16/IBM-3740", Width::W16, Algorithm::Crc16CcittFalse),
    ("CRC-16/IBM-SDLC", Width::W16, Algorithm::Crc16X25),
    ("CRC-32/ISO-HDLC", Width::W32, Algorithm::Crc32),
    ("crc-8/maxim-dow", Width::W8, Algorithm::Crc8Maxim),
    ("CRC-8/I-432-1", Width::W8, Algorithm::Crc8Itu),
  ] {
    assert_eq!(Algorithm::lookup(name, width), Ok(algorithm), "{name}");
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Differential: `crc` crate as an independent oracle
// ─────────────────────────────────────────────────────────────────────────────

fn oracle(algorithm: Algorithm, data: &[u8]) -> u32 {
  match algorithm {
    Algorithm::Crc8 => crc::Crc::<u8>::new(&crc::CRC_8_SMBUS).checksum(data).into(),
    Algorithm::Crc8Maxim => crc::Crc::<u8>::new(&crc::CRC_8_MAXIM_DOW).checksum(data).into(),
    Algorithm::Crc8Itu => crc::Crc::<u8>::new(&crc::CRC_8_I_432_1).checksum(data).into(),
    Algorithm::Crc8Rohc => crc::Crc::<u8>::new(&crc::CRC_8_ROHC).checksum(data).into(),
    Algorithm::Crc16Ibm => crc::Crc::<u16>::new(&crc::CRC_16_ARC).checksum(data).into(),
    Algorithm::Crc16Maxim => crc::Crc::<u16>::new(&crc::CRC_16_MAXIM_DOW).checksum(data).into(),
    Algorithm::Crc16Usb => crc::Crc::<u16>::new(&crc::CRC_16_USB).checksum(data).into(),
    Algorithm::Crc16Modbus => crc::Crc::<u16>::new(&crc::CRC_16_MODBUS).checksum(data).into(),
    Algorithm::Crc16CcittFalse => crc::Crc::<u16>::new(&crc::CRC_16_IBM_3740).checksum(data).into(),
    Algorithm::Crc16Ccitt => crc::Crc::<u16>::new(&crc::CRC_16_KERMIT).checksum(data).into(),
    Algorithm::Crc16Xmodem => crc::Crc::<u16>::new(&crc::CRC_16_XMODEM).checksum(data).into(),
    Algorithm::Crc16X25 => crc::Crc::<u16>::new(&crc::CRC_16_IBM_SDLC).checksum(data).into(),
    Algorithm::Crc16Dnp => crc::Crc::<u16>::new(&crc::CRC_16_DNP).checksum(data).into(),
    Algorithm::Crc32Mpeg2 => crc::Crc::<u32>::new(&crc::CRC_32_MPEG_2).checksum(data),
    Algorithm::Crc32 => crc::Crc::<u32>::new(&crc::CRC_32_ISO_HDLC).checksum(data),
  }
}

#[test]
fn builtins_match_crc_crate() {
  for algorithm in Algorithm::ALL {
    let params = algorithm.params();
    for len in [0usize, 1, 2, 3, 4, 7, 8, 15, 16, 63, 64, 255, 1000] {
      let data = gen_bytes(len, 0x9E37_79B9_7F4A_7C15 ^ len as u64);
      let expected = oracle(algorithm, &data);
      assert_eq!(engine::compute(&params, &data), expected, "{algorithm} len={len}");
      assert_eq!(algorithm.checksum(&data), expected, "{algorithm} len={len}");
    }
  }
}

#[test]
fn mixed_reflection_matches_crc_crate() {
  // Same generator as CRC-16/MODBUS, with input and output reflection split.
  for (refin, refout) in [(true, false), (false, true)] {
    let alg: &'static crc::Algorithm<u16> = Box::leak(Box::new(crc::Algorithm {
      width: 16,
      poly: 0x8005,
      init: 0xFFFF,
      refin,
      refout,
      xorout: 0x0000,
      check: 0,
      residue: 0,
    }));
    let oracle = crc::Crc::<u16>::new(alg);
    let params = CrcParams::new(Width::W16, 0x8005, 0xFFFF, refin, refout, 0).unwrap();
    let table = Table::new(params);
    for len in [0usize, 1, 9, 100] {
      let data = gen_bytes(len, len as u64);
      let expected = u32::from(oracle.checksum(&data));
      assert_eq!(engine::compute(&params, &data), expected, "refin={refin} refout={refout} len={len}");
      assert_eq!(table.checksum(&data), expected, "refin={refin} refout={refout} len={len}");
    }
  }
}

#[test]
fn reflected_init_is_loaded_unchanged() {
  let params = CrcParams::new(Width::W16, 0x1021, 0xB2AA, true, true, 0).unwrap();
  assert_eq!(engine::compute(&params, &[]), 0xB2AA);
  assert_eq!(Table::new(params).checksum(&[]), 0xB2AA);

  // The `crc` crate takes init MSB-first and reflects it for reflected
  // algorithms; the same CRC here is expressed with the reflected init.
  let riello = CrcParams::new(Width::W16, 0x1021, u64::from(checksum::reflect16(0xB2AA)), true, true, 0).unwrap();
  let oracle = crc::Crc::<u16>::new(&crc::CRC_16_RIELLO);
  for len in [0usize, 1, 9, 100] {
    let data = gen_bytes(len, 0xB2AA ^ len as u64);
    assert_eq!(engine::compute(&riello, &data), u32::from(oracle.checksum(&data)), "len={len}");
  }
}
