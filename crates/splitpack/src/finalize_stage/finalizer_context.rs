use arcstr::ArcStr;
use rustc_hash::FxHashMap;
use splitpack_common::{ChunkGraph, ImportTarget, IndexModules, ModuleRecord};

use crate::types::IndexAssets;

/// Read-only view of the frozen graph handed to one module's finalizer.
pub struct FinalizerContext<'me> {
  pub module: &'me ModuleRecord,
  pub modules: &'me IndexModules,
  pub chunk_graph: &'me ChunkGraph,
  pub assets: &'me IndexAssets,
  /// Specifier as written in the module to what it resolved to.
  pub import_targets: FxHashMap<ArcStr, ImportTarget>,
}

impl<'me> FinalizerContext<'me> {
  pub fn new(
    module: &'me ModuleRecord,
    modules: &'me IndexModules,
    chunk_graph: &'me ChunkGraph,
    assets: &'me IndexAssets,
  ) -> Self {
    let import_targets = module
      .import_records
      .iter()
      .map(|record| (record.specifier.clone(), record.target()))
      .collect();
    Self { module, modules, chunk_graph, assets, import_targets }
  }
}
