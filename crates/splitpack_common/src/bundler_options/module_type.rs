use std::path::Path;

use splitpack_utils::path_ext::PathExt;

use crate::NormalizedBundlerOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleType {
  Js,
  /// Handed to an asset loader, never parsed.
  Asset,
}

impl ModuleType {
  pub fn from_path(path: &Path, options: &NormalizedBundlerOptions) -> Self {
    let ext = path.extension_lowercase();
    if options.is_asset_extension(&ext) { Self::Asset } else { Self::Js }
  }
}
