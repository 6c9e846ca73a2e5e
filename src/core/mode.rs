//! Symbolic rendering of file mode words (`drwxr-xr-x`).

use std::fmt;

const TYPE_GLYPHS: [u8; 16] = [
  b'.', b'p', b'c', b'?', b'd', b'?', b'b', b'?', b'-', b'?', b'l', b'?', b's',
  b'?', b'?', b'?',
];

const TRIADS: [&[u8; 3]; 8] =
  [b"---", b"--x", b"-w-", b"-wx", b"r--", b"r-x", b"rw-", b"rwx"];

const S_IFMT: u32 = 0o170000;
const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

const NIBBLE_CHR: u32 = 2;
const NIBBLE_BLK: u32 = 6;
const NIBBLE_LNK: u32 = 10;

/// Ten-glyph mode string returned by value, so every call owns its result.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolicMode([u8; 10]);

impl SymbolicMode
{
  pub fn as_str(&self) -> &str
  {
    // every glyph comes from the ASCII tables above
    std::str::from_utf8(&self.0).unwrap_or_default()
  }

  pub fn file_type(&self) -> char
  {
    self.0[0] as char
  }
}

impl fmt::Display for SymbolicMode
{
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result
  {
    // `pad` keeps width/alignment flags working for listing columns
    f.pad(self.as_str())
  }
}

impl fmt::Debug for SymbolicMode
{
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result
  {
    write!(f, "SymbolicMode({:?})", self.as_str())
  }
}

impl PartialEq<&str> for SymbolicMode
{
  fn eq(
    &self,
    other: &&str,
  ) -> bool
  {
    self.as_str() == *other
  }
}

/// Render `mode` as a type glyph followed by the owner, group and other
/// permission triads.
///
/// Only the low 16 bits are inspected. Setuid, setgid and sticky bits replace
/// the execute glyph of the owner, group and other triad respectively: the
/// lower-case letter when the execute bit is also set, upper-case otherwise.
pub fn format_mode(mode: u32) -> SymbolicMode
{
  let mut out = [b'-'; 10];
  out[0] = TYPE_GLYPHS[type_nibble(mode) as usize];
  out[1..4].copy_from_slice(TRIADS[((mode >> 6) & 0o7) as usize]);
  out[4..7].copy_from_slice(TRIADS[((mode >> 3) & 0o7) as usize]);
  out[7..10].copy_from_slice(TRIADS[(mode & 0o7) as usize]);

  if mode & S_ISVTX != 0
  {
    out[9] = overlay(out[9], b't');
  }
  if mode & S_ISUID != 0
  {
    out[3] = overlay(out[3], b's');
  }
  if mode & S_ISGID != 0
  {
    out[6] = overlay(out[6], b's');
  }
  SymbolicMode(out)
}

fn overlay(
  exec: u8,
  letter: u8,
) -> u8
{
  if exec == b'x' { letter } else { letter.to_ascii_uppercase() }
}

/// File-type nibble (`mode >> 12 & 0xF`).
pub fn type_nibble(mode: u32) -> u32
{
  (mode & S_IFMT) >> 12
}

/// Glyph shown in the first column for `mode`'s file type.
pub fn file_type_glyph(mode: u32) -> char
{
  TYPE_GLYPHS[type_nibble(mode) as usize] as char
}

pub fn is_symlink(mode: u32) -> bool
{
  type_nibble(mode) == NIBBLE_LNK
}

/// Character or block device; these show a device number instead of a size.
pub fn is_device(mode: u32) -> bool
{
  matches!(type_nibble(mode), NIBBLE_CHR | NIBBLE_BLK)
}
