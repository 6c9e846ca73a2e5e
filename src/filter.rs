//! Line filters: `nolong` drops over-length lines, `nobin` additionally drops
//! lines that look binary. Dropped lines are replaced by a marker line.

use std::io::{
  self,
  BufRead,
  Write,
};

use crate::{
  config::{
    NobinConfig,
    NolongConfig,
  },
  core::{
    classify::is_binary,
    lines::{
      LineReader,
      ReadLine,
      limit_for_buffer,
    },
  },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats
{
  pub passed: usize,
  pub long:   usize,
  pub binary: usize,
}

/// Copy `input` to `out`, replacing every line that does not fit a
/// `cfg.max_line` byte buffer with `cfg.marker`.
pub fn nolong<R: BufRead, W: Write>(
  input: R,
  out: &mut W,
  cfg: &NolongConfig,
) -> io::Result<FilterStats>
{
  run(input, out, cfg.max_line, &cfg.marker, None)
}

/// Like [`nolong`], and lines that pass the length check are replaced with
/// `cfg.marker` when they look binary.
pub fn nobin<R: BufRead, W: Write>(
  input: R,
  out: &mut W,
  cfg: &NobinConfig,
) -> io::Result<FilterStats>
{
  run(input, out, cfg.max_line, &cfg.long_marker, Some(&cfg.marker))
}

fn run<R: BufRead, W: Write>(
  input: R,
  out: &mut W,
  max_line: usize,
  long_marker: &str,
  binary_marker: Option<&str>,
) -> io::Result<FilterStats>
{
  let mut reader = LineReader::new(input, limit_for_buffer(max_line));
  let mut stats = FilterStats::default();

  while let Some(line) = reader.next_line()?
  {
    match line
    {
      ReadLine::Overlong =>
      {
        stats.long += 1;
        write_marker(out, long_marker)?;
      }
      ReadLine::Complete(bytes) =>
      {
        if let Some(marker) = binary_marker
          && is_binary(&bytes)
        {
          stats.binary += 1;
          write_marker(out, marker)?;
          continue;
        }
        stats.passed += 1;
        out.write_all(&bytes)?;
      }
    }
  }
  Ok(stats)
}

fn write_marker<W: Write>(
  out: &mut W,
  marker: &str,
) -> io::Result<()>
{
  out.write_all(marker.as_bytes())?;
  out.write_all(b"\n")
}
