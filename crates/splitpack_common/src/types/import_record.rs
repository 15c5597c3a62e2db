use std::fmt::Debug;

use arcstr::ArcStr;

use crate::{AssetIdx, ImportKind, ModuleIdx};

pub type RawImportRecord = ImportRecord<()>;
pub type ResolvedImportRecord = ImportRecord<ImportTarget>;

/// What a specifier ended up naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTarget {
  Module(ModuleIdx),
  /// Non-script file handled by an asset loader, it never becomes a graph edge.
  Asset(AssetIdx),
}

impl ImportTarget {
  pub fn as_module(&self) -> Option<ModuleIdx> {
    match self {
      Self::Module(idx) => Some(*idx),
      Self::Asset(_) => None,
    }
  }
}

/// One import-like occurrence in a module: a declaration with a source or an `import()` call.
/// `state` is empty while scanning and holds the resolved target afterwards.
#[derive(Debug)]
pub struct ImportRecord<State: Debug> {
  pub state: State,
  /// `./lib.js` in `import { foo } from './lib.js';`
  pub specifier: ArcStr,
  pub kind: ImportKind,
  /// Export names read from the target, `*` for the whole namespace.
  pub imported_names: Vec<ArcStr>,
}

impl RawImportRecord {
  pub fn new(specifier: ArcStr, kind: ImportKind) -> Self {
    Self { state: (), specifier, kind, imported_names: vec![] }
  }

  #[must_use]
  pub fn with_imported_names(mut self, imported_names: Vec<ArcStr>) -> Self {
    self.imported_names = imported_names;
    self
  }

  pub fn into_resolved(self, target: ImportTarget) -> ResolvedImportRecord {
    ResolvedImportRecord {
      state: target,
      specifier: self.specifier,
      kind: self.kind,
      imported_names: self.imported_names,
    }
  }
}

impl ResolvedImportRecord {
  pub fn target(&self) -> ImportTarget {
    self.state
  }
}
