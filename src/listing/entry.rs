use std::{
  fs,
  io,
  os::unix::fs::MetadataExt,
  path::{
    Path,
    PathBuf,
  },
};

/// Where a symlink points, or why that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget
{
  Path(PathBuf),
  Unreadable(String),
}

/// The `lstat` fields a listing line shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo
{
  pub ino:    u64,
  /// 512-byte blocks allocated.
  pub blocks: u64,
  pub mode:   u32,
  pub nlink:  u64,
  pub uid:    u32,
  pub gid:    u32,
  pub size:   u64,
  /// Device id for character and block devices.
  pub rdev:   u64,
  /// Modification time, seconds since the epoch.
  pub mtime:  i64,
  pub link:   Option<LinkTarget>,
}

impl EntryInfo
{
  /// Look up `path` without following a final symlink. Symlink targets are
  /// read as part of the lookup.
  pub fn lstat(path: &Path) -> io::Result<Self>
  {
    let meta = fs::symlink_metadata(path)?;
    let link = if meta.file_type().is_symlink()
    {
      Some(match fs::read_link(path)
      {
        Ok(target) => LinkTarget::Path(target),
        Err(e) => LinkTarget::Unreadable(e.to_string()),
      })
    }
    else
    {
      None
    };
    Ok(Self {
      ino: meta.ino(),
      blocks: meta.blocks(),
      mode: meta.mode(),
      nlink: meta.nlink(),
      uid: meta.uid(),
      gid: meta.gid(),
      size: meta.size(),
      rdev: meta.rdev(),
      mtime: meta.mtime(),
      link,
    })
  }

  pub fn is_symlink(&self) -> bool
  {
    crate::core::mode::is_symlink(self.mode)
  }

  pub fn is_device(&self) -> bool
  {
    crate::core::mode::is_device(self.mode)
  }
}
