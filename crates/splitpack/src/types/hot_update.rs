use splitpack_common::{ChunkIdx, ModuleId};
use splitpack_error::BuildDiagnostic;

/// Result of re-transforming one changed module against a frozen module table.
#[derive(Debug)]
pub enum HotUpdate {
  /// The module now depends on something the table does not know about.
  NeedsRebuild,
  Patch {
    /// Owner of the module, whose loader receives the patch.
    chunk_idx: ChunkIdx,
    path: ModuleId,
    /// A standalone script that swaps the module's factory in the running loader.
    code: String,
    warnings: Vec<BuildDiagnostic>,
  },
}
