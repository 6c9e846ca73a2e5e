//! Column helpers for the listing line.

use chrono::{
  DateTime,
  Datelike,
  Local,
  TimeZone,
};
use unicode_width::UnicodeWidthStr;

/// `ls -l` style modification time: `"Jan  5 09:41"` for entries newer than
/// `recent_secs`, `"Jan  5  2019"` otherwise. Timestamps in the future count
/// as recent.
pub fn format_listing_time(
  mtime: i64,
  now: i64,
  recent_secs: i64,
) -> String
{
  format_listing_time_in(mtime, now, recent_secs, &Local)
}

pub fn format_listing_time_in<Tz: TimeZone>(
  mtime: i64,
  now: i64,
  recent_secs: i64,
  tz: &Tz,
) -> String
where
  Tz::Offset: std::fmt::Display,
{
  let dt = DateTime::from_timestamp(mtime, 0)
    .unwrap_or_default()
    .with_timezone(tz);
  if now.saturating_sub(mtime) < recent_secs
  {
    dt.format("%b %e %H:%M").to_string()
  }
  else
  {
    format!("{} {:>2} {:>5}", dt.format("%b"), dt.day(), dt.year())
  }
}

/// Left-align `s` in a column of `width` terminal cells. Longer values are
/// kept whole.
pub fn pad_right(
  s: &str,
  width: usize,
) -> String
{
  let w = UnicodeWidthStr::width(s);
  let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
  out.push_str(s);
  for _ in w..width
  {
    out.push(' ');
  }
  out
}

/// Major number of a Linux device id.
pub fn dev_major(dev: u64) -> u64
{
  ((dev >> 8) & 0xfff) | ((dev >> 32) & 0xffff_f000)
}

/// Minor number of a Linux device id.
pub fn dev_minor(dev: u64) -> u64
{
  (dev & 0xff) | ((dev >> 12) & 0xffff_ff00)
}

/// Size column for a device node: `major,minor` in hex, nine cells wide.
pub fn format_device(dev: u64) -> String
{
  format!("{:>4x},{:>4x}", dev_major(dev), dev_minor(dev))
}
