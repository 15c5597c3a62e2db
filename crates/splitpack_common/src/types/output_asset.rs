use arcstr::ArcStr;

/// A file an asset loader copied into the output directory.
#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub source: ArcStr,
  pub filename: String,
}
