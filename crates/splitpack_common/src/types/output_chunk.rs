use crate::{ChunkIdx, ModuleId};

#[derive(Debug, Clone)]
pub struct OutputChunk {
  pub chunk_idx: ChunkIdx,
  pub is_entry: bool,
  /// Relative to the output directory.
  pub filename: String,
  pub code: String,
  /// Members whose factories ship in this artifact.
  pub modules: Vec<ModuleId>,
}
