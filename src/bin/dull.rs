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
  listing::{
    self,
    NameLookup,
    NumericNames,
    SystemNames,
  },
};

/// Read paths from stdin, one per line, and print an `ls -l` style line for
/// each. Text before the first tab on a line is echoed in front of the
/// listing.
#[derive(Debug, Parser)]
#[command(name = "dull", version, about)]
struct Args
{
  /// Line buffer size in bytes (default 131072)
  #[arg(long, value_name = "BYTES", value_parser = cli::parse_max_line)]
  max_line: Option<usize>,

  /// Show a year instead of a time for entries older than SECS seconds
  #[arg(long, value_name = "SECS")]
  recent_secs: Option<i64>,

  /// Show numeric user and group ids instead of names
  #[arg(short = 'n', long)]
  numeric_ids: bool,

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
    .dull;
  if let Some(n) = args.max_line
  {
    cfg.max_line = n;
  }
  if let Some(secs) = args.recent_secs
  {
    cfg.recent_secs = secs;
  }
  tracing::debug!(
    max_line = cfg.max_line,
    recent_secs = cfg.recent_secs,
    "[dull] starting"
  );

  let names: Box<dyn NameLookup> = if args.numeric_ids
  {
    Box::new(NumericNames)
  }
  else
  {
    Box::new(SystemNames::new())
  };
  let now = chrono::Utc::now().timestamp();

  let input = io::stdin().lock();
  let mut out = BufWriter::new(io::stdout().lock());
  let mut errors = io::stderr().lock();
  let res =
    listing::dull(input, &mut out, &mut errors, &cfg, names.as_ref(), now)
      .and_then(|stats| out.flush().map(|()| stats));
  if let Some(stats) =
    cli::ignore_broken_pipe(res).context("dull: listing stdin failed")?
  {
    tracing::debug!(
      listed = stats.listed,
      failed = stats.failed,
      skipped_long = stats.skipped_long,
      "[dull] done"
    );
  }
  Ok(())
}
