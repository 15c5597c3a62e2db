use std::path::Path;

use arcstr::ArcStr;
use sugar_path::SugarPath;

/// The canonical absolute path of a module, its identity in the module table and the key of its
/// factory in the emitted module map.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  pub fn as_arc_str(&self) -> &ArcStr {
    &self.0
  }

  /// Path relative to `cwd` with forward slashes, for messages and logs.
  pub fn stabilize(&self, cwd: &Path) -> String {
    if self.as_path().is_absolute() {
      self.relative(cwd).as_path().to_slash_lossy().into_owned()
    } else {
      self.to_string()
    }
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl std::borrow::Borrow<str> for ModuleId {
  fn borrow(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl AsRef<Path> for ModuleId {
  fn as_ref(&self) -> &Path {
    Path::new(self.0.as_str())
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}

impl std::fmt::Display for ModuleId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

#[test]
fn test_stabilize() {
  let id = ModuleId::new("/project/src/main.js");
  assert_eq!(id.stabilize(Path::new("/project")), "src/main.js");
}
