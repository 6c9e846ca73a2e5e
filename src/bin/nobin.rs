use std::io::{
  self,
  BufWriter,
  Write,
};

use anyhow::{
  Context,
  Result,
};
use clap::Parser;
use linesift::{
  cli::{
    self,
    CommonArgs,
  },
  filter,
};

/// Copy stdin to stdout, replacing binary-looking and over-length lines with
/// markers.
#[derive(Debug, Parser)]
#[command(name = "nobin", version, about)]
struct Args
{
  /// Line buffer size in bytes (default 1024)
  #[arg(long, value_name = "BYTES", value_parser = cli::parse_max_line)]
  max_line: Option<usize>,

  /// Text written in place of a binary line
  #[arg(long, value_name = "TEXT")]
  marker: Option<String>,

  /// Text written in place of an over-length line
  #[arg(long, value_name = "TEXT")]
  long_marker: Option<String>,

  #[command(flatten)]
  common: CommonArgs,
}

fn main() -> Result<()>
{
  let args = Args::parse();
  args.common.install();

  let mut cfg = args
    .common
    .load_config()
    .context("failed to load configuration")?
    .nobin;
  if let Some(n) = args.max_line
  {
    cfg.max_line = n;
  }
  if let Some(m) = args.marker
  {
    cfg.marker = m;
  }
  if let Some(m) = args.long_marker
  {
    cfg.long_marker = m;
  }
  tracing::debug!(max_line = cfg.max_line, "[nobin] starting");

  let input = io::stdin().lock();
  let mut out = BufWriter::new(io::stdout().lock());
  let res = filter::nobin(input, &mut out, &cfg)
    .and_then(|stats| out.flush().map(|()| stats));
  if let Some(stats) =
    cli::ignore_broken_pipe(res).context("nobin: filtering stdin failed")?
  {
    tracing::debug!(
      passed = stats.passed,
      long = stats.long,
      binary = stats.binary,
      "[nobin] done"
    );
  }
  Ok(())
}
