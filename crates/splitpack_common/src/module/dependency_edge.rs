use arcstr::ArcStr;
use splitpack_utils::indexmap::FxIndexSet;

use crate::{ImportKind, ModuleIdx};

/// `importer -> target`, carrying the export names the importer reads from the target.
#[derive(Debug, Clone)]
pub struct DependencyEdge {
  pub target: ModuleIdx,
  pub kind: ImportKind,
  /// `*` when the whole namespace is consumed (`import * as ns`, `export * from`).
  pub imported_names: FxIndexSet<ArcStr>,
}

impl DependencyEdge {
  pub fn new(target: ModuleIdx, kind: ImportKind, imported_names: &[ArcStr]) -> Self {
    Self { target, kind, imported_names: imported_names.iter().cloned().collect() }
  }

  pub fn is_static(&self) -> bool {
    self.kind.is_static()
  }
}
