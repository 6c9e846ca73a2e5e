// Public library interface for the binaries and integration tests.
pub mod cli;
pub mod config;
pub mod core;
pub mod filter;
pub mod format;
pub mod listing;
pub mod trace;

pub use crate::core::{
  classify::{
    Classification,
    LineCounts,
    classify,
    is_binary,
  },
  mode::{
    SymbolicMode,
    format_mode,
  },
};
