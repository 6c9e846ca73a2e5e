use std::{
  collections::HashMap,
  fs,
  os::unix::fs::{
    PermissionsExt,
    symlink,
  },
  path::{
    Path,
    PathBuf,
  },
};

use linesift::{
  config::DullConfig,
  listing::{
    DullStats,
    EntryInfo,
    LinkTarget,
    NameLookup,
    NumericNames,
    READLINK_FAILED,
    SystemNames,
    dull,
    format_entry_with_time,
  },
};

struct FixedNames
{
  users:  HashMap<u32, &'static str>,
  groups: HashMap<u32, &'static str>,
}

impl NameLookup for FixedNames
{
  fn user_name(
    &self,
    uid: u32,
  ) -> Option<String>
  {
    self.users.get(&uid).map(|s| s.to_string())
  }

  fn group_name(
    &self,
    gid: u32,
  ) -> Option<String>
  {
    self.groups.get(&gid).map(|s| s.to_string())
  }
}

fn names() -> FixedNames
{
  FixedNames {
    users:  HashMap::from([(1000, "alice")]),
    groups: HashMap::from([(100, "users")]),
  }
}

fn entry(mode: u32) -> EntryInfo
{
  EntryInfo {
    ino: 1234,
    blocks: 8,
    mode,
    nlink: 1,
    uid: 1000,
    gid: 100,
    size: 4096,
    rdev: 0,
    mtime: 0,
    link: None,
  }
}

fn line(
  e: &EntryInfo,
  path: &str,
  names: &dyn NameLookup,
) -> String
{
  let bytes = format_entry_with_time(e, Path::new(path), "Jan  5 09:41", names);
  String::from_utf8(bytes).expect("utf8 line")
}

#[test]
fn regular_file_columns()
{
  let got = line(&entry(0o100644), "notes.txt", &names());
  assert_eq!(
    got,
    "      1234    8 -rw-r--r--   1 alice    users         4096 Jan  5 09:41 \
     notes.txt\n"
  );
}

#[test]
fn unknown_ids_fall_back_to_numbers()
{
  let got = line(&entry(0o040755), "dir", &NumericNames);
  assert_eq!(
    got,
    "      1234    8 drwxr-xr-x   1 1000     100           4096 Jan  5 09:41 \
     dir\n"
  );
}

#[test]
fn devices_show_major_minor()
{
  let mut e = entry(0o020620);
  e.ino = 77;
  e.blocks = 0;
  e.rdev = (136 << 8) | 3;
  e.gid = 5;
  let got = line(&e, "/dev/pts/3", &NumericNames);
  assert_eq!(
    got,
    "        77    0 crw--w----   1 1000     5          88,   3 Jan  5 09:41 \
     /dev/pts/3\n"
  );
}

#[test]
fn symlinks_show_target()
{
  let mut e = entry(0o120777);
  e.link = Some(LinkTarget::Path(PathBuf::from("../target")));
  assert!(line(&e, "link", &names()).ends_with(" link -> ../target\n"));

  e.link = Some(LinkTarget::Unreadable("denied".to_string()));
  let got = line(&e, "link", &names());
  assert!(got.ends_with(&format!(" link -> {READLINK_FAILED}\n")), "{got}");
}

#[test]
fn lstat_reads_real_metadata()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let file = tmp.path().join("data.bin");
  fs::write(&file, b"0123456789").unwrap();
  fs::set_permissions(&file, fs::Permissions::from_mode(0o640)).unwrap();

  let info = EntryInfo::lstat(&file).expect("lstat");
  assert_eq!(info.size, 10);
  assert_eq!(info.mode & 0o7777, 0o640);
  assert!(!info.is_symlink());
  assert_eq!(info.link, None);
}

#[test]
fn lstat_does_not_follow_symlinks()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let link = tmp.path().join("dangling");
  symlink("nowhere", &link).unwrap();

  let info = EntryInfo::lstat(&link).expect("lstat");
  assert!(info.is_symlink());
  assert_eq!(info.link, Some(LinkTarget::Path(PathBuf::from("nowhere"))));
}

fn run_dull(input: &str) -> (String, String, DullStats)
{
  let mut out = Vec::new();
  let mut err = Vec::new();
  let stats = dull(
    input.as_bytes(),
    &mut out,
    &mut err,
    &DullConfig::default(),
    &NumericNames,
    0,
  )
  .expect("dull");
  (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap(), stats)
}

#[test]
fn dull_lists_each_input_path()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let root = tmp.path();
  let file = root.join("one.txt");
  let dir = root.join("sub");
  let link = root.join("ln");
  fs::write(&file, b"ONE").unwrap();
  fs::set_permissions(&file, fs::Permissions::from_mode(0o600)).unwrap();
  fs::create_dir(&dir).unwrap();
  fs::set_permissions(&dir, fs::Permissions::from_mode(0o751)).unwrap();
  symlink("one.txt", &link).unwrap();

  let input =
    format!("{}\n{}\n{}\n", file.display(), dir.display(), link.display());
  let (out, err, stats) = run_dull(&input);
  let lines: Vec<&str> = out.lines().collect();

  assert_eq!(stats, DullStats { listed: 3, failed: 0, skipped_long: 0 });
  assert!(err.is_empty(), "unexpected errors: {err}");
  assert_eq!(lines.len(), 3);
  assert!(lines[0].contains(" -rw------- "), "{}", lines[0]);
  assert!(lines[0].contains(&format!("{:>9} ", 3)), "{}", lines[0]);
  assert!(lines[0].ends_with(&file.display().to_string()));
  assert!(lines[1].contains(" drwxr-x--x "), "{}", lines[1]);
  assert!(lines[2].contains(" lrwxrwxrwx "), "{}", lines[2]);
  assert!(lines[2].ends_with(&format!("{} -> one.txt", link.display())));
}

#[test]
fn dull_keeps_tab_prefix()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let file = tmp.path().join("f");
  fs::write(&file, b"").unwrap();

  let input = format!("42 matches\t{}\n", file.display());
  let (out, _, stats) = run_dull(&input);
  assert_eq!(stats.listed, 1);
  assert!(out.starts_with("42 matches\t"), "{out}");
  assert!(out.ends_with(&format!("{}\n", file.display())), "{out}");
  assert_eq!(out.matches('\t').count(), 1);
}

#[test]
fn dull_reports_missing_paths_and_continues()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let present = tmp.path().join("here");
  fs::write(&present, b"x").unwrap();
  let missing = tmp.path().join("gone");

  let input = format!(
    "prefix\t{}\n{}\n",
    missing.display(),
    present.display()
  );
  let (out, err, stats) = run_dull(&input);
  assert_eq!(stats, DullStats { listed: 1, failed: 1, skipped_long: 0 });
  assert!(err.starts_with(&format!("{}: ", missing.display())), "{err}");
  assert!(!out.contains("prefix"), "{out}");
  assert_eq!(out.lines().count(), 1);
  assert!(out.trim_end().ends_with(&present.display().to_string()));
}

#[test]
fn dull_skips_over_length_lines()
{
  let tmp = tempfile::tempdir().expect("tmp");
  let file = tmp.path().join("ok");
  fs::write(&file, b"").unwrap();

  let cfg = DullConfig { max_line: 1024, ..DullConfig::default() };
  let input = format!("{}\n{}\n", "a".repeat(5000), file.display());
  let mut out = Vec::new();
  let mut err = Vec::new();
  let stats = dull(input.as_bytes(), &mut out, &mut err, &cfg, &NumericNames, 0)
    .expect("dull");
  assert_eq!(stats.skipped_long, 1);
  assert_eq!(stats.listed, 1);
  assert!(err.is_empty());
}

#[test]
fn system_names_resolve_the_superuser()
{
  let names = SystemNames::new();
  assert!(names.user_name(0).is_some());
  assert!(names.group_name(0).is_some());
  // cached lookups answer the same way
  assert_eq!(names.user_name(0), names.user_name(0));
}
