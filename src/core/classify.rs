//! Byte-level heuristic deciding whether a line of text "looks binary".
//!
//! The scan is a cheap approximation of UTF-8 validation: it walks the line
//! once, decoding lead and continuation bytes without checking code point
//! ranges, and counts what it sees. A line is binary when at least a quarter
//! of its bytes were counted as invalid.

/// Per-line tallies gathered during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts
{
  pub ascii:   usize,
  pub control: usize,
  pub binary:  usize,
  pub utf8:    usize,
}

/// Result of scanning one line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification
{
  pub counts:    LineCounts,
  /// Bytes before the first NUL, `\r` or `\n`.
  pub len:       usize,
  /// A multi-byte sequence ran into the end of the buffer and the scan
  /// stopped there.
  pub truncated: bool,
}

impl Classification
{
  pub fn is_binary(&self) -> bool
  {
    self.len != 0 && self.counts.binary * 4 >= self.len
  }
}

/// True when `line` looks like binary data rather than text.
///
/// `line` may carry its terminator; scanning stops at the first NUL, `\r` or
/// `\n`. An empty line is never binary.
pub fn is_binary(line: &[u8]) -> bool
{
  classify(line).is_binary()
}

pub fn classify(line: &[u8]) -> Classification
{
  let len = line
    .iter()
    .position(|&b| is_terminator(b))
    .unwrap_or(line.len());
  let mut counts = LineCounts::default();
  let mut truncated = false;
  let mut i = 0;

  while i < len
  {
    let b = line[i];
    if (32..=126).contains(&b) || b == b'\t'
    {
      counts.ascii += 1;
      i += 1;
      continue;
    }
    if b & 0x80 == 0
    {
      counts.control += 1;
      i += 1;
      continue;
    }
    if let Some(width) = sequence_width(b)
    {
      match scan_continuations(line, i, width)
      {
        Continuations::Complete =>
        {
          counts.utf8 += width;
          i += width;
        }
        Continuations::Invalid(at) =>
        {
          counts.binary += 1;
          i = at;
        }
        Continuations::Exhausted =>
        {
          truncated = true;
          break;
        }
      }
      continue;
    }
    if i == 0 && is_continuation(b)
    {
      // line starts in the middle of a character split off the previous line
      while i < len && i < 3 && is_continuation(line[i])
      {
        counts.utf8 += 1;
        i += 1;
      }
      continue;
    }
    counts.binary += 1;
    i += 1;
  }

  Classification { counts, len, truncated }
}

enum Continuations
{
  Complete,
  /// Index of the first byte that should have been a continuation byte.
  Invalid(usize),
  Exhausted,
}

fn scan_continuations(
  line: &[u8],
  lead: usize,
  width: usize,
) -> Continuations
{
  for at in lead + 1..lead + width
  {
    match line.get(at)
    {
      None | Some(0) => return Continuations::Exhausted,
      Some(&b) if is_continuation(b) =>
      {}
      Some(_) => return Continuations::Invalid(at),
    }
  }
  Continuations::Complete
}

fn sequence_width(b: u8) -> Option<usize>
{
  if b & 0xE0 == 0xC0
  {
    Some(2)
  }
  else if b & 0xF0 == 0xE0
  {
    Some(3)
  }
  else if b & 0xF8 == 0xF0
  {
    Some(4)
  }
  else
  {
    None
  }
}

fn is_continuation(b: u8) -> bool
{
  b & 0xC0 == 0x80
}

fn is_terminator(b: u8) -> bool
{
  matches!(b, 0 | b'\r' | b'\n')
}
