use std::path::Path;

use serde::Deserialize;
use splitpack_fs::FileSystem;

use crate::ResolveError;

/// The only part of a package manifest resolution looks at.
#[derive(Debug, Default, Deserialize)]
pub struct PackageJson {
  pub main: Option<String>,
}

impl PackageJson {
  /// `Ok(None)` when there is no manifest. A manifest that exists but does not parse is an
  /// error, it is never silently skipped.
  pub fn read(fs: &dyn FileSystem, path: &Path) -> Result<Option<Self>, ResolveError> {
    if !fs.is_file(path) {
      return Ok(None);
    }
    let content = fs
      .read_to_string(path)
      .map_err(|source| ResolveError::Io { path: path.to_path_buf(), source })?;
    serde_json::from_str(&content)
      .map(Some)
      .map_err(|source| ResolveError::InvalidPackageJson { path: path.to_path_buf(), source })
  }

  /// `main` if declared, Node's `index.js` default otherwise.
  pub fn main_or_default(&self) -> &str {
    self.main.as_deref().filter(|main| !main.is_empty()).unwrap_or("index.js")
  }
}
