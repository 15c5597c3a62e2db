use arcstr::ArcStr;
use oxc_index::IndexVec;

use crate::{Chunk, ChunkIdx, ChunkKind, IndexModules, ModuleIdx};

/// Chunks in discovery order plus the owner of every module.
///
/// The `parent` links form a tree rooted at chunk 0. On top of that every chunk lists, in
/// `children`, all chunks created transitively beneath it.
#[derive(Debug)]
pub struct ChunkGraph {
  pub chunks: IndexVec<ChunkIdx, Chunk>,
  pub module_to_chunk: IndexVec<ModuleIdx, Option<ChunkIdx>>,
}

impl ChunkGraph {
  pub fn new(entry: ModuleIdx, name: ArcStr) -> Self {
    let mut chunks = IndexVec::default();
    chunks.push(Chunk::new(ChunkIdx::ENTRY, ChunkKind::Entry, None, entry, name));
    Self { chunks, module_to_chunk: IndexVec::default() }
  }

  pub fn entry(&self) -> &Chunk {
    &self.chunks[ChunkIdx::ENTRY]
  }

  pub fn owner_of(&self, module: ModuleIdx) -> Option<ChunkIdx> {
    self.module_to_chunk.get(module).copied().flatten()
  }

  /// Makes `chunk` the owner of a module that has none yet.
  pub fn assign(&mut self, module: ModuleIdx, chunk: ChunkIdx) {
    debug_assert!(self.owner_of(module).is_none());
    if self.module_to_chunk.len() <= module.index() {
      self.module_to_chunk.resize(module.index() + 1, None);
    }
    self.module_to_chunk[module] = Some(chunk);
    self.chunks[chunk].modules.push(module);
  }

  /// Allocates the next chunk id beneath `parent` and records it as reachable from `parent` and
  /// every ancestor of `parent`. The upward walk stops at the first chunk that already lists it.
  pub fn add_chunk(&mut self, parent: ChunkIdx, root: ModuleIdx, name: ArcStr) -> ChunkIdx {
    let idx = self.chunks.next_idx();
    self.chunks.push(Chunk::new(idx, ChunkKind::DynamicImport, Some(parent), root, name));

    let mut cursor = Some(parent);
    while let Some(ancestor) = cursor {
      if !self.chunks[ancestor].children.insert(idx) {
        break;
      }
      cursor = self.chunks[ancestor].parent;
    }

    tracing::debug!(chunk = idx.raw(), parent = parent.raw(), root = root.raw(), "created chunk");
    idx
  }

  /// `chunk` followed by its parents up to chunk 0.
  pub fn ancestors(&self, chunk: ChunkIdx) -> impl Iterator<Item = ChunkIdx> + '_ {
    std::iter::successors(Some(chunk), |idx| self.chunks[*idx].parent)
  }

  /// Whether the code of `ancestor` is always loaded by the time `chunk` runs.
  pub fn is_ancestor_or_self(&self, ancestor: ChunkIdx, chunk: ChunkIdx) -> bool {
    self.ancestors(chunk).any(|idx| idx == ancestor)
  }

  pub fn lowest_common_ancestor(&self, a: ChunkIdx, b: ChunkIdx) -> ChunkIdx {
    self.ancestors(a).find(|idx| self.is_ancestor_or_self(*idx, b)).unwrap_or(ChunkIdx::ENTRY)
  }

  /// Moves modules that are statically required from a chunk which does not load their owner up
  /// to the lowest common ancestor of both chunks. Owners only ever move towards the root, so the
  /// loop reaches a fixpoint.
  pub fn hoist_shared_modules(&mut self, modules: &IndexModules) {
    loop {
      let mut moved = false;
      for module in modules {
        let Some(importer_chunk) = self.owner_of(module.idx) else { continue };
        for dependency in module.static_dependencies() {
          let Some(owner) = self.owner_of(dependency) else { continue };
          if self.is_ancestor_or_self(owner, importer_chunk) {
            continue;
          }
          let target = self.lowest_common_ancestor(owner, importer_chunk);
          self.move_module(dependency, owner, target);
          tracing::debug!(
            module = modules[dependency].stable_id.as_str(),
            from = owner.raw(),
            to = target.raw(),
            "hoisted shared module"
          );
          moved = true;
        }
      }
      if !moved {
        break;
      }
    }
  }

  fn move_module(&mut self, module: ModuleIdx, from: ChunkIdx, to: ChunkIdx) {
    self.chunks[from].modules.retain(|idx| *idx != module);
    self.chunks[to].modules.push(module);
    self.module_to_chunk[module] = Some(to);
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use arcstr::ArcStr;
  use oxc_index::IndexVec;

  use super::ChunkGraph;
  use crate::{ChunkIdx, DependencyEdge, ImportKind, ModuleId, ModuleIdx, ModuleRecord};

  fn record(idx: usize, static_deps: &[usize]) -> ModuleRecord {
    let mut record = ModuleRecord::new(
      ModuleIdx::from_usize(idx),
      ModuleId::new(format!("/m{idx}.js")),
      Path::new("/"),
      idx == 0,
    );
    record.dependencies = static_deps
      .iter()
      .map(|dep| DependencyEdge::new(ModuleIdx::from_usize(*dep), ImportKind::Import, &[]))
      .collect();
    record
  }

  #[test]
  fn nested_chunks_are_listed_by_every_ancestor() {
    let mut graph = ChunkGraph::new(ModuleIdx::from_usize(0), ArcStr::from("main"));
    let c1 = graph.add_chunk(ChunkIdx::ENTRY, ModuleIdx::from_usize(1), ArcStr::from("c1"));
    let c2 = graph.add_chunk(c1, ModuleIdx::from_usize(2), ArcStr::from("c2"));
    let c3 = graph.add_chunk(c2, ModuleIdx::from_usize(3), ArcStr::from("c3"));

    assert_eq!(graph.entry().children.iter().copied().collect::<Vec<_>>(), vec![c1, c2, c3]);
    assert_eq!(graph.chunks[c1].children.iter().copied().collect::<Vec<_>>(), vec![c2, c3]);
    assert!(graph.chunks[c3].children.is_empty());
    assert_eq!(graph.chunks[c3].parent, Some(c2));
    assert_eq!(graph.ancestors(c3).collect::<Vec<_>>(), vec![c3, c2, c1, ChunkIdx::ENTRY]);
  }

  #[test]
  fn lowest_common_ancestor_of_siblings_is_their_parent() {
    let mut graph = ChunkGraph::new(ModuleIdx::from_usize(0), ArcStr::from("main"));
    let c1 = graph.add_chunk(ChunkIdx::ENTRY, ModuleIdx::from_usize(1), ArcStr::from("c1"));
    let c2 = graph.add_chunk(c1, ModuleIdx::from_usize(2), ArcStr::from("c2"));
    let c3 = graph.add_chunk(c1, ModuleIdx::from_usize(3), ArcStr::from("c3"));

    assert_eq!(graph.lowest_common_ancestor(c2, c3), c1);
    assert_eq!(graph.lowest_common_ancestor(c2, c1), c1);
    assert_eq!(graph.lowest_common_ancestor(c3, ChunkIdx::ENTRY), ChunkIdx::ENTRY);
  }

  #[test]
  fn module_shared_by_sibling_chunks_moves_to_their_parent() {
    // m0 (entry) -> import(m1), import(m2); m1 -> m3; m2 -> m3
    let modules: IndexVec<ModuleIdx, ModuleRecord> =
      IndexVec::from_vec(vec![record(0, &[]), record(1, &[3]), record(2, &[3]), record(3, &[])]);

    let mut graph = ChunkGraph::new(ModuleIdx::from_usize(0), ArcStr::from("main"));
    graph.assign(ModuleIdx::from_usize(0), ChunkIdx::ENTRY);
    let c1 = graph.add_chunk(ChunkIdx::ENTRY, ModuleIdx::from_usize(1), ArcStr::from("a"));
    graph.assign(ModuleIdx::from_usize(1), c1);
    graph.assign(ModuleIdx::from_usize(3), c1);
    let c2 = graph.add_chunk(ChunkIdx::ENTRY, ModuleIdx::from_usize(2), ArcStr::from("b"));
    graph.assign(ModuleIdx::from_usize(2), c2);

    graph.hoist_shared_modules(&modules);

    assert_eq!(graph.owner_of(ModuleIdx::from_usize(3)), Some(ChunkIdx::ENTRY));
    assert_eq!(graph.chunks[c1].modules, vec![ModuleIdx::from_usize(1)]);
    assert_eq!(graph.chunks[c2].modules, vec![ModuleIdx::from_usize(2)]);
    assert_eq!(
      graph.entry().modules,
      vec![ModuleIdx::from_usize(0), ModuleIdx::from_usize(3)]
    );
  }

  #[test]
  fn module_owned_by_an_ancestor_stays_put() {
    let modules: IndexVec<ModuleIdx, ModuleRecord> =
      IndexVec::from_vec(vec![record(0, &[2]), record(1, &[2]), record(2, &[])]);

    let mut graph = ChunkGraph::new(ModuleIdx::from_usize(0), ArcStr::from("main"));
    graph.assign(ModuleIdx::from_usize(0), ChunkIdx::ENTRY);
    graph.assign(ModuleIdx::from_usize(2), ChunkIdx::ENTRY);
    let c1 = graph.add_chunk(ChunkIdx::ENTRY, ModuleIdx::from_usize(1), ArcStr::from("a"));
    graph.assign(ModuleIdx::from_usize(1), c1);

    graph.hoist_shared_modules(&modules);

    assert_eq!(graph.owner_of(ModuleIdx::from_usize(2)), Some(ChunkIdx::ENTRY));
    assert_eq!(graph.chunks[c1].modules, vec![ModuleIdx::from_usize(1)]);
  }
}
