use std::path::Path;

use arcstr::ArcStr;
use splitpack_utils::indexmap::FxIndexSet;

use crate::{DependencyEdge, ImportTarget, ModuleId, ModuleIdx, ResolvedImportRecord};

#[derive(Debug)]
pub struct ModuleRecord {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  /// `id` relative to `cwd`, stable across machines. Used in logs and messages.
  pub stable_id: String,
  pub is_entry_file: bool,
  /// Names this module statically exports. `*` stands for the surface of an `export * from`.
  pub exports_declared: FxIndexSet<ArcStr>,
  /// Appended in source order while the module's own declarations are scanned.
  pub dependencies: Vec<DependencyEdge>,
  pub import_records: Vec<ResolvedImportRecord>,
}

impl ModuleRecord {
  pub fn new(idx: ModuleIdx, id: ModuleId, cwd: &Path, is_entry_file: bool) -> Self {
    let stable_id = id.stabilize(cwd);
    Self {
      idx,
      id,
      stable_id,
      is_entry_file,
      exports_declared: FxIndexSet::default(),
      dependencies: vec![],
      import_records: vec![],
    }
  }

  pub fn path(&self) -> &Path {
    self.id.as_ref()
  }

  /// What `specifier` resolved to when this module was scanned.
  pub fn resolved_target(&self, specifier: &str) -> Option<ImportTarget> {
    self
      .import_records
      .iter()
      .find(|record| record.specifier.as_str() == specifier)
      .map(ResolvedImportRecord::target)
  }

  pub fn static_dependencies(&self) -> impl Iterator<Item = ModuleIdx> + '_ {
    self.dependencies.iter().filter(|edge| edge.is_static()).map(|edge| edge.target)
  }
}
