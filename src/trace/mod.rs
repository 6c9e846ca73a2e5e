use std::{
  fs::OpenOptions,
  path::PathBuf,
  sync::Mutex,
};

use tracing_subscriber::EnvFilter;

/// Tracing is opt-in: `LINESIFT_TRACE` must be set to something other than
/// an empty string or `0`.
pub fn enabled() -> bool
{
  std::env::var("LINESIFT_TRACE")
    .map(|v| !v.is_empty() && v != "0")
    .unwrap_or(false)
}

/// Route `tracing` events to the trace file when tracing is enabled.
///
/// The level filter comes from `RUST_LOG` and defaults to `debug`. Calling
/// this more than once, or with tracing disabled, is a no-op.
pub fn init()
{
  if !enabled()
  {
    return;
  }
  let Some(path) = file_path()
  else
  {
    return;
  };
  let file = match OpenOptions::new().create(true).append(true).open(&path)
  {
    Ok(f) => f,
    Err(_) => return,
  };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new("debug"));
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_ansi(false)
    .with_target(false)
    .with_writer(Mutex::new(file))
    .try_init();
}

pub fn log<S: AsRef<str>>(s: S)
{
  tracing::debug!("{}", s.as_ref());
}

/// Install a panic hook that logs the panic message, location, and backtrace
/// to the trace log before handing over to the default hook.
pub fn install_panic_hook()
{
  let previous = std::panic::take_hook();
  std::panic::set_hook(Box::new(move |info| {
    let msg = if let Some(s) = info.payload().downcast_ref::<&str>()
    {
      s.to_string()
    }
    else if let Some(s) = info.payload().downcast_ref::<String>()
    {
      s.clone()
    }
    else
    {
      String::from("<non-string panic payload>")
    };
    let loc = info
      .location()
      .map(|l| format!("{}:{}", l.file(), l.line()))
      .unwrap_or_else(|| "<unknown>".to_string());
    if enabled()
    {
      let bt = std::backtrace::Backtrace::force_capture();
      tracing::error!("[panic] {msg} @ {loc}");
      tracing::error!("[panic] backtrace:\n{bt}");
    }
    previous(info);
  }));
}

fn file_path() -> Option<PathBuf>
{
  if let Ok(fp) = std::env::var("LINESIFT_TRACE_FILE")
    && !fp.is_empty()
  {
    return Some(PathBuf::from(fp));
  }
  if let Ok(tmp) = std::env::var("TMPDIR")
    && !tmp.is_empty()
  {
    return Some(PathBuf::from(tmp).join("linesift-trace.log"));
  }
  Some(PathBuf::from("/tmp/linesift-trace.log"))
}
