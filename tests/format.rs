use chrono::Utc;
use linesift::{
  config::DEFAULT_RECENT_SECS,
  format::{
    dev_major,
    dev_minor,
    format_device,
    format_listing_time,
    format_listing_time_in,
    pad_right,
  },
};

const NOV_14_2023: i64 = 1_700_000_000;
const JAN_05_2024: i64 = 1_704_412_800;

#[test]
fn recent_entries_show_clock_time()
{
  let s = format_listing_time_in(
    NOV_14_2023,
    NOV_14_2023 + 60,
    DEFAULT_RECENT_SECS,
    &Utc,
  );
  assert_eq!(s, "Nov 14 22:13");
}

#[test]
fn old_entries_show_year()
{
  let now = NOV_14_2023 + DEFAULT_RECENT_SECS;
  let s = format_listing_time_in(NOV_14_2023, now, DEFAULT_RECENT_SECS, &Utc);
  assert_eq!(s, "Nov 14  2023");
}

#[test]
fn single_digit_days_are_space_padded()
{
  let s = format_listing_time_in(
    JAN_05_2024,
    JAN_05_2024,
    DEFAULT_RECENT_SECS,
    &Utc,
  );
  assert_eq!(s, "Jan  5 00:00");
  let s = format_listing_time_in(
    JAN_05_2024,
    JAN_05_2024 + 400 * 86_400,
    DEFAULT_RECENT_SECS,
    &Utc,
  );
  assert_eq!(s, "Jan  5  2024");
}

#[test]
fn future_timestamps_count_as_recent()
{
  let s = format_listing_time_in(
    JAN_05_2024,
    NOV_14_2023,
    DEFAULT_RECENT_SECS,
    &Utc,
  );
  assert_eq!(s, "Jan  5 00:00");
}

#[test]
fn local_time_has_fixed_width()
{
  // avoid timezone brittleness: only the shape is checked
  let recent = format_listing_time(
    NOV_14_2023,
    NOV_14_2023 + 10,
    DEFAULT_RECENT_SECS,
  );
  assert_eq!(recent.len(), 12, "got: {recent}");
  assert!(recent.contains(':'), "got: {recent}");
  let old = format_listing_time(0, NOV_14_2023, DEFAULT_RECENT_SECS);
  assert_eq!(old.len(), 12, "got: {old}");
  assert!(old.ends_with("1970") || old.ends_with("1969"), "got: {old}");
}

#[test]
fn name_columns()
{
  assert_eq!(pad_right("", 3), "   ");
  assert_eq!(pad_right("wheel", 8), "wheel   ");
}

#[test]
fn device_numbers()
{
  let tty = (136u64 << 8) | 3;
  assert_eq!(dev_major(tty), 136);
  assert_eq!(dev_minor(tty), 3);
  assert_eq!(format_device(tty), "  88,   3");

  // minor numbers above 0xff keep their high bits above the major
  let split = (1u64 << 8) | (0x1000u64 << 12) | 0x2;
  assert_eq!(dev_major(split), 1);
  assert_eq!(dev_minor(split), 0x1002);
}
