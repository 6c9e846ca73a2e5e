use uzers::{
  Groups,
  Users,
  UsersCache,
};

/// Resolves numeric owner and group ids to names.
pub trait NameLookup
{
  fn user_name(
    &self,
    uid: u32,
  ) -> Option<String>;

  fn group_name(
    &self,
    gid: u32,
  ) -> Option<String>;
}

/// Lookups against the system user and group databases, cached for the life
/// of the value.
pub struct SystemNames
{
  cache: UsersCache,
}

impl SystemNames
{
  pub fn new() -> Self
  {
    Self { cache: UsersCache::new() }
  }
}

impl Default for SystemNames
{
  fn default() -> Self
  {
    Self::new()
  }
}

impl NameLookup for SystemNames
{
  fn user_name(
    &self,
    uid: u32,
  ) -> Option<String>
  {
    self
      .cache
      .get_user_by_uid(uid)
      .map(|u| u.name().to_string_lossy().into_owned())
  }

  fn group_name(
    &self,
    gid: u32,
  ) -> Option<String>
  {
    self
      .cache
      .get_group_by_gid(gid)
      .map(|g| g.name().to_string_lossy().into_owned())
  }
}

/// Never resolves anything; every owner shows as a number.
pub struct NumericNames;

impl NameLookup for NumericNames
{
  fn user_name(
    &self,
    _uid: u32,
  ) -> Option<String>
  {
    None
  }

  fn group_name(
    &self,
    _gid: u32,
  ) -> Option<String>
  {
    None
  }
}
