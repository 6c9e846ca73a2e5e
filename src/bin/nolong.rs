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

/// Copy stdin to stdout, replacing lines that do not fit the line buffer with
/// a marker.
#[derive(Debug, Parser)]
#[command(name = "nolong", version, about)]
struct Args
{
  /// Line buffer size in bytes (default 1024)
  #[arg(long, value_name = "BYTES", value_parser = cli::parse_max_line)]
  max_line: Option<usize>,

  /// Text written in place of an over-length line
  #[arg(long, value_name = "TEXT")]
  marker: Option<String>,

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
    .nolong;
  if let Some(n) = args.max_line
  {
    cfg.max_line = n;
  }
  if let Some(m) = args.marker
  {
    cfg.marker = m;
  }
  tracing::debug!(max_line = cfg.max_line, "[nolong] starting");

  let input = io::stdin().lock();
  let mut out = BufWriter::new(io::stdout().lock());
  let res = filter::nolong(input, &mut out, &cfg)
    .and_then(|stats| out.flush().map(|()| stats));
  if let Some(stats) =
    cli::ignore_broken_pipe(res).context("nolong: filtering stdin failed")?
  {
    tracing::debug!(
      passed = stats.passed,
      long = stats.long,
      "[nolong] done"
    );
  }
  Ok(())
}
