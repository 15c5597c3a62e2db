use oxc_index::IndexVec;
use rustc_hash::FxHashMap;

use crate::{ModuleId, ModuleIdx, ModuleRecord};

pub type IndexModules = IndexVec<ModuleIdx, ModuleRecord>;

/// Canonical path to record. Holds at most one record per path, so a traversal that reaches a
/// path a second time finds the existing record instead of entering it again.
#[derive(Debug, Default)]
pub struct ModuleTable {
  pub modules: IndexModules,
  pub path_to_idx: FxHashMap<ModuleId, ModuleIdx>,
}

impl ModuleTable {
  pub fn get_by_path(&self, path: &str) -> Option<&ModuleRecord> {
    self.idx_of(path).map(|idx| &self.modules[idx])
  }

  pub fn idx_of(&self, path: &str) -> Option<ModuleIdx> {
    self.path_to_idx.get(path).copied()
  }

  pub fn len(&self) -> usize {
    self.modules.len()
  }

  pub fn is_empty(&self) -> bool {
    self.modules.is_empty()
  }

  /// Registers a record. The caller checked that its path is not present yet.
  pub fn insert(&mut self, module: ModuleRecord) -> ModuleIdx {
    debug_assert!(!self.path_to_idx.contains_key(&module.id));
    let id = module.id.clone();
    let idx = self.modules.push(module);
    self.path_to_idx.insert(id, idx);
    idx
  }

  pub fn next_idx(&self) -> ModuleIdx {
    self.modules.next_idx()
  }
}
