//! Flags and start-up steps shared by the `dull`, `nobin` and `nolong`
//! binaries.

use std::{
  env,
  io,
  path::PathBuf,
};

use clap::Args;

use crate::config::{
  Config,
  MIN_LINE_MAX,
  discover_config_paths,
  load_config,
};

#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs
{
  /// Use DIR as the config root (sets LINESIFT_CONFIG_DIR)
  #[arg(long, value_name = "DIR")]
  pub config_dir: Option<PathBuf>,

  /// Enable tracing to FILE (default $TMPDIR/linesift-trace.log)
  #[arg(
    long,
    value_name = "FILE",
    num_args = 0..=1,
    require_equals = true,
    default_missing_value = ""
  )]
  pub trace: Option<String>,
}

impl CommonArgs
{
  /// Export the flags to the environment and start tracing. Must run before
  /// any other thread is spawned.
  pub fn install(&self)
  {
    if let Some(dir) = &self.config_dir
    {
      unsafe { env::set_var("LINESIFT_CONFIG_DIR", dir) };
    }
    if let Some(file) = &self.trace
    {
      unsafe { env::set_var("LINESIFT_TRACE", "1") };
      if !file.is_empty()
      {
        unsafe { env::set_var("LINESIFT_TRACE_FILE", file) };
      }
    }
    crate::trace::install_panic_hook();
    crate::trace::init();
  }

  pub fn load_config(&self) -> io::Result<Config>
  {
    let paths = discover_config_paths()?;
    load_config(&paths)
  }
}

/// `value_parser` for `--max-line`.
pub fn parse_max_line(s: &str) -> Result<usize, String>
{
  let n: usize = s.parse().map_err(|e| format!("{e}"))?;
  if n < MIN_LINE_MAX
  {
    return Err(format!("must be at least {MIN_LINE_MAX}"));
  }
  Ok(n)
}

/// Treat a closed stdout (`head`, `less` quitting) as a normal end of output.
pub fn ignore_broken_pipe<T>(res: io::Result<T>) -> io::Result<Option<T>>
{
  match res
  {
    Ok(v) => Ok(Some(v)),
    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(None),
    Err(e) => Err(e),
  }
}
