use std::{
  cell::RefCell,
  fs,
  io,
  rc::Rc,
};

use super::{
  Config,
  ConfigPaths,
  LuaEngine,
  io_err,
};

/// Load the user's `init.lua` if present, falling back to defaults.
pub fn load_config(paths: &ConfigPaths) -> io::Result<Config>
{
  if !paths.exists
  {
    crate::trace::log(format!(
      "[config] no init.lua under {}, using defaults",
      paths.root.display()
    ));
    return Ok(Config::default());
  }
  let code = fs::read_to_string(&paths.entry)
    .map_err(|e| io_err(format!("read init.lua failed: {e}")))?;
  crate::trace::log(format!(
    "[lua] exec user config: {}",
    paths.entry.to_string_lossy()
  ));
  eval(&code, &paths.entry.to_string_lossy())
}

/// Load configuration from a Lua source string for tests or programmatic use.
pub fn load_config_from_code(code: &str) -> io::Result<Config>
{
  crate::trace::log("[lua] exec inline init.lua");
  eval(code, "inline init.lua")
}

fn eval(
  code: &str,
  name: &str,
) -> io::Result<Config>
{
  let engine =
    LuaEngine::new().map_err(|e| io_err(format!("lua init failed: {e}")))?;
  let lua = engine.lua();

  let config_acc = Rc::new(RefCell::new(Config::default()));
  super::api::install_api(lua, Rc::clone(&config_acc))
    .map_err(|e| io_err(format!("api install failed: {e}")))?;

  if let Err(e) = lua.load(code).set_name(name).exec()
  {
    crate::trace::log(format!("[lua] {name} error: {e}"));
    return Err(io_err(format!("{name} execution failed: {e}")));
  }

  let cfg = config_acc.borrow().clone();
  Ok(cfg)
}
