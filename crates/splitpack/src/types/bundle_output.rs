use splitpack_common::{OutputAsset, OutputChunk};
use splitpack_error::BuildDiagnostic;

#[derive(Debug, Default)]
pub struct BundleOutput {
  /// One artifact per chunk id, chunk 0 first.
  pub chunks: Vec<OutputChunk>,
  pub assets: Vec<OutputAsset>,
  /// Recoverable diagnostics. Never contains a fatal one.
  pub warnings: Vec<BuildDiagnostic>,
}

impl BundleOutput {
  pub fn entry(&self) -> Option<&OutputChunk> {
    self.chunks.iter().find(|chunk| chunk.is_entry)
  }
}
