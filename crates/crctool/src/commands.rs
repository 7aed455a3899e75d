//! Subcommand implementations.
//!
//! Every command writes to a caller-supplied writer and reads hex input from
//! its arguments or, when none are given, from a caller-supplied reader.

use std::io::{Read, Write};

use anyhow::Context;
use checksum::{
  Algorithm, ByteOrder, Width,
  codec::{append_hex, format_hex, normalize_hex, parse_hex},
  list_algorithms,
};

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthArg {
  #[value(name = "8")]
  W8,
  #[default]
  #[value(name = "16")]
  W16,
  #[value(name = "32")]
  W32,
}

impl From<WidthArg> for Width {
  fn from(arg: WidthArg) -> Self {
    match arg {
      WidthArg::W8 => Self::W8,
      WidthArg::W16 => Self::W16,
      WidthArg::W32 => Self::W32,
    }
  }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrderArg {
  /// Least significant byte first.
  #[default]
  #[value(alias = "le")]
  Little,
  /// Most significant byte first.
  #[value(alias = "be")]
  Big,
}

impl From<ByteOrderArg> for ByteOrder {
  fn from(arg: ByteOrderArg) -> Self {
    match arg {
      ByteOrderArg::Little => Self::Little,
      ByteOrderArg::Big => Self::Big,
    }
  }
}

#[derive(clap::Args, Debug)]
pub struct ComputeArgs {
  /// Algorithm name, e.g. `CRC16_MODBUS` or `CRC-16/MODBUS`.
  #[arg(long, short)]
  pub algorithm: String,
  /// Checksum width in bits.
  #[arg(long, short, value_enum, default_value_t = WidthArg::W16)]
  pub width: WidthArg,
  /// Byte order of the printed checksum.
  #[arg(long, value_enum, env = "CRCTOOL_BYTE_ORDER", default_value_t = ByteOrderArg::Little)]
  pub byte_order: ByteOrderArg,
  /// Print the input with the checksum appended.
  #[arg(long)]
  pub append: bool,
  /// Also print the checksum as a decimal number.
  #[arg(long)]
  pub decimal: bool,
  /// Hex input. Read from stdin when omitted.
  pub hex: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct FormatArgs {
  /// Omit the spaces between bytes.
  #[arg(long)]
  pub compact: bool,
  /// Hex input. Read from stdin when omitted.
  pub hex: Vec<String>,
}

fn read_input(hex: &[String], mut stdin: impl Read) -> anyhow::Result<String> {
  if !hex.is_empty() {
    return Ok(hex.join(" "));
  }
  let mut text = String::new();
  stdin.read_to_string(&mut text).context("read hex input from stdin")?;
  Ok(text)
}

fn widths(filter: Option<Width>) -> Vec<Width> {
  filter.map_or_else(|| Width::ALL.to_vec(), |w| vec![w])
}

pub fn list(out: &mut impl Write, width: Option<Width>) -> anyhow::Result<()> {
  match width {
    Some(width) => {
      for name in list_algorithms(width) {
        writeln!(out, "{name}")?;
      }
    }
    None => {
      for width in Width::ALL {
        writeln!(out, "{width}-bit:")?;
        for name in list_algorithms(width) {
          writeln!(out, "  {name}")?;
        }
      }
    }
  }
  Ok(())
}

pub fn params(out: &mut impl Write, width: Option<Width>) -> anyhow::Result<()> {
  writeln!(
    out,
    "{:<18} {:<20} {:>5} {:>10} {:>10} {:>5} {:>6} {:>10} {:>10}",
    "IDENT", "NAME", "WIDTH", "POLY", "INIT", "REFIN", "REFOUT", "XOROUT", "CHECK"
  )?;
  for width in widths(width) {
    let digits = width.bytes() * 2;
    for algorithm in Algorithm::for_width(width) {
      let p = algorithm.params();
      writeln!(
        out,
        "{:<18} {:<20} {:>5} {:>10} {:>10} {:>5} {:>6} {:>10} {:>10}",
        algorithm.ident(),
        algorithm.name(),
        width.bits(),
        format!("0x{:0digits$X}", p.polynomial()),
        format!("0x{:0digits$X}", p.initial()),
        p.reflect_in(),
        p.reflect_out(),
        format!("0x{:0digits$X}", p.xor_out()),
        format!("0x{:0digits$X}", algorithm.check()),
      )?;
    }
  }
  Ok(())
}

pub fn compute(out: &mut impl Write, args: &ComputeArgs, stdin: impl Read) -> anyhow::Result<()> {
  let width = Width::from(args.width);
  let order = ByteOrder::from(args.byte_order);
  let algorithm =
    Algorithm::lookup(&args.algorithm, width).with_context(|| format!("resolve algorithm {:?}", args.algorithm))?;
  tracing::debug!(%algorithm, ident = algorithm.ident(), %width, ?order, "resolved algorithm");

  let text = read_input(&args.hex, stdin)?;
  let data = parse_hex(&text).context("parse hex input")?;
  let value = algorithm.checksum(&data);
  tracing::debug!("{} over {} bytes: {value} (0x{value:X})", algorithm.ident(), data.len());

  let line = if args.append {
    append_hex(&text, value, width, order)
  } else {
    format_hex(value, width, order)
  };
  writeln!(out, "{line}")?;
  if args.decimal {
    writeln!(out, "{value}")?;
  }
  Ok(())
}

pub fn format(out: &mut impl Write, args: &FormatArgs, stdin: impl Read) -> anyhow::Result<()> {
  let text = read_input(&args.hex, stdin)?;
  let formatted = normalize_hex(&text, !args.compact).context("parse hex input")?;
  writeln!(out, "{formatted}")?;
  Ok(())
}
