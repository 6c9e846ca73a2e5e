use mlua::{
  Error as LuaError,
  Lua,
  Result as LuaResult,
  Table,
  Value,
};
use std::{
  cell::RefCell,
  io,
  rc::Rc,
};

use super::{
  Config,
  DullConfig,
  MIN_LINE_MAX,
  NobinConfig,
  NolongConfig,
};

/// Install the `linesift` table with `linesift.config(tbl)`. Each call merges
/// the given sections into `config_acc`; keys that are absent keep their
/// current value and unknown keys are ignored.
pub(crate) fn install_api(
  lua: &Lua,
  config_acc: Rc<RefCell<Config>>,
) -> io::Result<()>
{
  let globals = lua.globals();
  let ns: Table =
    lua.create_table().map_err(|e| io::Error::other(e.to_string()))?;

  let config_fn = lua
    .create_function(move |_, tbl: Value| {
      let Value::Table(t) = tbl
      else
      {
        return Err(LuaError::RuntimeError(
          "linesift.config expects a table".to_string(),
        ));
      };
      let mut cfg = config_acc
        .try_borrow_mut()
        .map_err(|e| LuaError::RuntimeError(e.to_string()))?;
      if let Some(section) = t.get::<Option<Table>>("nolong")?
      {
        apply_nolong(&section, &mut cfg.nolong)?;
      }
      if let Some(section) = t.get::<Option<Table>>("nobin")?
      {
        apply_nobin(&section, &mut cfg.nobin)?;
      }
      if let Some(section) = t.get::<Option<Table>>("dull")?
      {
        apply_dull(&section, &mut cfg.dull)?;
      }
      Ok(true)
    })
    .map_err(|e| io::Error::other(e.to_string()))?;

  ns.set("config", config_fn)
    .map_err(|e| io::Error::other(e.to_string()))?;
  globals
    .set("linesift", ns)
    .map_err(|e| io::Error::other(e.to_string()))?;
  Ok(())
}

fn apply_nolong(
  t: &Table,
  cfg: &mut NolongConfig,
) -> LuaResult<()>
{
  if let Some(n) = read_max_line(t)?
  {
    cfg.max_line = n;
  }
  if let Some(s) = t.get::<Option<String>>("marker")?
  {
    cfg.marker = s;
  }
  Ok(())
}

fn apply_nobin(
  t: &Table,
  cfg: &mut NobinConfig,
) -> LuaResult<()>
{
  if let Some(n) = read_max_line(t)?
  {
    cfg.max_line = n;
  }
  if let Some(s) = t.get::<Option<String>>("marker")?
  {
    cfg.marker = s;
  }
  if let Some(s) = t.get::<Option<String>>("long_marker")?
  {
    cfg.long_marker = s;
  }
  Ok(())
}

fn apply_dull(
  t: &Table,
  cfg: &mut DullConfig,
) -> LuaResult<()>
{
  if let Some(n) = read_max_line(t)?
  {
    cfg.max_line = n;
  }
  if let Some(secs) = t.get::<Option<i64>>("recent_secs")?
  {
    cfg.recent_secs = secs;
  }
  Ok(())
}

fn read_max_line(t: &Table) -> LuaResult<Option<usize>>
{
  match t.get::<Option<i64>>("max_line")?
  {
    None => Ok(None),
    Some(n) if n >= MIN_LINE_MAX as i64 => Ok(Some(n as usize)),
    Some(n) => Err(LuaError::RuntimeError(format!(
      "max_line must be at least {MIN_LINE_MAX}, got {n}"
    ))),
  }
}
