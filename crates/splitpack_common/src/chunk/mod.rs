pub mod chunk_graph;

use arcstr::ArcStr;
use splitpack_utils::indexmap::FxIndexSet;

use crate::{ChunkIdx, ChunkKind, FilenameTemplate, ModuleIdx, NormalizedBundlerOptions};

#[derive(Debug)]
pub struct Chunk {
  pub idx: ChunkIdx,
  pub kind: ChunkKind,
  /// `None` only for the entry chunk.
  pub parent: Option<ChunkIdx>,
  /// The entry module for chunk 0, the `import()` target otherwise.
  pub root: ModuleIdx,
  /// Modules this chunk owns, in discovery order.
  pub modules: Vec<ModuleIdx>,
  /// Every chunk transitively created beneath this one.
  pub children: FxIndexSet<ChunkIdx>,
  pub name: ArcStr,
}

impl Chunk {
  pub fn new(
    idx: ChunkIdx,
    kind: ChunkKind,
    parent: Option<ChunkIdx>,
    root: ModuleIdx,
    name: ArcStr,
  ) -> Self {
    Self { idx, kind, parent, root, modules: vec![], children: FxIndexSet::default(), name }
  }

  pub fn is_entry(&self) -> bool {
    matches!(self.kind, ChunkKind::Entry)
  }

  pub fn filename_template(&self, options: &NormalizedBundlerOptions) -> FilenameTemplate {
    if self.is_entry() {
      FilenameTemplate::new(options.entry_filenames.clone())
    } else {
      FilenameTemplate::new(options.chunk_filenames.clone())
    }
  }
}
