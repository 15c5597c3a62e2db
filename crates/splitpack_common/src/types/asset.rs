use arcstr::ArcStr;

use crate::AssetIdx;

/// A non-script import target, copied once into the output directory by an asset loader.
#[derive(Debug, Clone)]
pub struct Asset {
  pub idx: AssetIdx,
  /// Canonical source path.
  pub source: ArcStr,
  /// Path of the copy, relative to the output directory.
  pub reference: String,
}
