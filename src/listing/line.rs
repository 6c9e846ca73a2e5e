use std::{
  os::unix::ffi::OsStrExt,
  path::Path,
};

use super::{
  EntryInfo,
  LinkTarget,
  NameLookup,
};
use crate::{
  config::DullConfig,
  core::mode::format_mode,
  format::{
    format_device,
    format_listing_time,
    pad_right,
  },
};

/// Shown after ` -> ` when a symlink's target could not be read.
pub const READLINK_FAILED: &str = "<readlink failed>";

const NAME_WIDTH: usize = 8;

/// Render the listing line for `entry` (newline included). `path` is written
/// back byte for byte as it was given.
pub fn format_entry(
  entry: &EntryInfo,
  path: &Path,
  now: i64,
  names: &dyn NameLookup,
  cfg: &DullConfig,
) -> Vec<u8>
{
  let time = format_listing_time(entry.mtime, now, cfg.recent_secs);
  format_entry_with_time(entry, path, &time, names)
}

/// Same as [`format_entry`] with the time column already rendered.
pub fn format_entry_with_time(
  entry: &EntryInfo,
  path: &Path,
  time: &str,
  names: &dyn NameLookup,
) -> Vec<u8>
{
  let owner = names
    .user_name(entry.uid)
    .unwrap_or_else(|| entry.uid.to_string());
  let group = names
    .group_name(entry.gid)
    .unwrap_or_else(|| entry.gid.to_string());
  let size = if entry.is_device()
  {
    format_device(entry.rdev)
  }
  else
  {
    format!("{:>9}", entry.size)
  };

  let head = format!(
    "{:>10} {:>4} {:>10} {:>3} {} {} {} {} ",
    entry.ino,
    entry.blocks,
    format_mode(entry.mode),
    entry.nlink,
    pad_right(&owner, NAME_WIDTH),
    pad_right(&group, NAME_WIDTH),
    size,
    time,
  );

  let mut out = head.into_bytes();
  out.extend_from_slice(path.as_os_str().as_bytes());
  if entry.is_symlink()
  {
    out.extend_from_slice(b" -> ");
    match &entry.link
    {
      Some(LinkTarget::Path(target)) =>
      {
        out.extend_from_slice(target.as_os_str().as_bytes())
      }
      Some(LinkTarget::Unreadable(_)) | None =>
      {
        out.extend_from_slice(READLINK_FAILED.as_bytes())
      }
    }
  }
  out.push(b'\n');
  out
}
