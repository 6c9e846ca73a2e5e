use std::{
  ffi::OsStr,
  io::{
    self,
    BufRead,
    Write,
  },
  os::unix::ffi::OsStrExt,
  path::Path,
};

use super::{
  EntryInfo,
  LinkTarget,
  NameLookup,
  format_entry,
};
use crate::{
  config::DullConfig,
  core::lines::{
    LineReader,
    ReadLine,
    limit_for_buffer,
  },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DullStats
{
  pub listed:       usize,
  pub failed:       usize,
  pub skipped_long: usize,
}

/// Read one path per line from `input` and write a listing line for each.
///
/// A line of the form `prefix<TAB>path` lists `path` and keeps `prefix<TAB>`
/// in front of the output. Paths that cannot be looked up are reported on
/// `errors` and produce no output; over-length lines are skipped.
pub fn dull<R, W, E>(
  input: R,
  out: &mut W,
  errors: &mut E,
  cfg: &DullConfig,
  names: &dyn NameLookup,
  now: i64,
) -> io::Result<DullStats>
where
  R: BufRead,
  W: Write,
  E: Write,
{
  let mut reader = LineReader::new(input, limit_for_buffer(cfg.max_line));
  let mut stats = DullStats::default();

  while let Some(line) = reader.next_line()?
  {
    let bytes = match line
    {
      ReadLine::Complete(b) => b,
      ReadLine::Overlong =>
      {
        stats.skipped_long += 1;
        crate::trace::log("[dull] skipped over-length line");
        continue;
      }
    };
    let text = bytes.strip_suffix(b"\n").unwrap_or(&bytes[..]);
    let (prefix, raw_path) = split_prefix(text);
    let path = Path::new(OsStr::from_bytes(raw_path));

    match EntryInfo::lstat(path)
    {
      Ok(entry) =>
      {
        if let Some(p) = prefix
        {
          out.write_all(p)?;
          out.write_all(b"\t")?;
        }
        write_entry(out, errors, path, &entry, now, names, cfg)?;
        stats.listed += 1;
      }
      Err(e) =>
      {
        crate::trace::log(format!(
          "[dull] lstat {} failed: {e}",
          path.display()
        ));
        report(errors, raw_path, &e.to_string())?;
        stats.failed += 1;
      }
    }
  }
  Ok(stats)
}

/// Split `prefix<TAB>rest` at the first tab.
pub fn split_prefix(line: &[u8]) -> (Option<&[u8]>, &[u8])
{
  match line.iter().position(|&b| b == b'\t')
  {
    Some(i) => (Some(&line[..i]), &line[i + 1..]),
    None => (None, line),
  }
}

/// Write one listing line for an `lstat` that succeeded. A symlink whose
/// target could not be read is still listed, and the failure goes to `errors`.
fn write_entry<W: Write, E: Write>(
  out: &mut W,
  errors: &mut E,
  path: &Path,
  entry: &EntryInfo,
  now: i64,
  names: &dyn NameLookup,
  cfg: &DullConfig,
) -> io::Result<()>
{
  if let Some(LinkTarget::Unreadable(msg)) = &entry.link
  {
    report(errors, path.as_os_str().as_bytes(), msg)?;
  }
  out.write_all(&format_entry(entry, path, now, names, cfg))
}

fn report<E: Write>(
  errors: &mut E,
  path: &[u8],
  msg: &str,
) -> io::Result<()>
{
  errors.write_all(path)?;
  errors.write_all(b": ")?;
  errors.write_all(msg.as_bytes())?;
  errors.write_all(b"\n")
}
