//! `ls -l` style lines for paths read from a stream.

mod entry;
mod line;
mod names;
mod stream;

pub use entry::{
  EntryInfo,
  LinkTarget,
};
pub use line::{
  READLINK_FAILED,
  format_entry,
  format_entry_with_time,
};
pub use names::{
  NameLookup,
  NumericNames,
  SystemNames,
};
pub use stream::{
  DullStats,
  dull,
  split_prefix,
};
