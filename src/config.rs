//! Loading configuration for the filters.
//!
//! Each tool works without any configuration. Users can override limits and
//! markers from a Lua file (`init.lua`) evaluated in a restricted runtime;
//! command-line flags take precedence over whatever the file sets.

mod api;
mod loader;
mod lua_engine;
mod paths;

pub use loader::{
  load_config,
  load_config_from_code,
};
pub use lua_engine::LuaEngine;
pub use paths::{
  ConfigPaths,
  discover_config_paths,
};

/// Buffer size shared by `nolong` and `nobin`.
pub const DEFAULT_LONG_LINE_MAX: usize = 1024;
/// Buffer size for path lines read by `dull`.
pub const DEFAULT_PATH_LINE_MAX: usize = 131_072;
/// Entries modified more recently than this show a clock time instead of a
/// year.
pub const DEFAULT_RECENT_SECS: i64 = 60 * 60 * 24 * 365 / 2;

pub const LONG_LINE_MARKER: &str = "<long line>";
pub const BINARY_LINE_MARKER: &str = "<binary line>";

/// Smallest usable buffer: one byte of content plus the string terminator.
pub const MIN_LINE_MAX: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Top-level configuration composed from Lua input.
pub struct Config
{
  pub nolong: NolongConfig,
  pub nobin:  NobinConfig,
  pub dull:   DullConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NolongConfig
{
  pub max_line: usize,
  pub marker:   String,
}

impl Default for NolongConfig
{
  fn default() -> Self
  {
    Self {
      max_line: DEFAULT_LONG_LINE_MAX,
      marker:   LONG_LINE_MARKER.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NobinConfig
{
  pub max_line:    usize,
  /// Replacement for lines classified as binary.
  pub marker:      String,
  /// Replacement for over-length lines, which are never classified.
  pub long_marker: String,
}

impl Default for NobinConfig
{
  fn default() -> Self
  {
    Self {
      max_line:    DEFAULT_LONG_LINE_MAX,
      marker:      BINARY_LINE_MARKER.to_string(),
      long_marker: LONG_LINE_MARKER.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DullConfig
{
  pub max_line:    usize,
  pub recent_secs: i64,
}

impl Default for DullConfig
{
  fn default() -> Self
  {
    Self { max_line: DEFAULT_PATH_LINE_MAX, recent_secs: DEFAULT_RECENT_SECS }
  }
}

fn io_err(msg: String) -> std::io::Error
{
  std::io::Error::other(msg)
}
