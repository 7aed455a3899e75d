mod commands;

use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::commands::{ComputeArgs, FormatArgs, WidthArg};

/// crctool -- CRC-8/16/32 checksums for hex byte strings.
///
/// Input bytes are given as hex digits, separated by whitespace or not. The
/// checksum can be printed on its own or appended to the input.
#[derive(clap::Parser, Debug)]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
  /// List algorithm names, grouped by width.
  List {
    /// Only list algorithms of this width.
    #[arg(long, short)]
    width: Option<WidthArg>,
  },
  /// Show the parameters of every algorithm.
  Params {
    /// Only show algorithms of this width.
    #[arg(long, short)]
    width: Option<WidthArg>,
  },
  /// Compute the checksum of hex input.
  Compute(ComputeArgs),
  /// Normalize hex text to uppercase, spaced or compact.
  Format(FormatArgs),
}

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::builder().with_default_directive(LevelFilter::WARN.into()).from_env_lossy())
    .with_writer(std::io::stderr)
    .init();
}

fn main() -> ExitCode {
  init_logging();

  match main_imp(Cli::parse()) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!("{e:?}");
      ExitCode::FAILURE
    }
  }
}

fn main_imp(cli: Cli) -> anyhow::Result<()> {
  let stdout = std::io::stdout();
  let mut out = stdout.lock();
  match cli.command {
    Command::List { width } => commands::list(&mut out, width.map(Into::into)),
    Command::Params { width } => commands::params(&mut out, width.map(Into::into)),
    Command::Compute(args) => commands::compute(&mut out, &args, std::io::stdin().lock()),
    Command::Format(args) => commands::format(&mut out, &args, std::io::stdin().lock()),
  }
}
