use std::path::Path;

use arcstr::ArcStr;
use splitpack_common::{
  ChunkGraph, ChunkIdx, DependencyEdge, ImportKind, ImportTarget, ModuleId, ModuleIdx,
  ModuleRecord, ModuleTable, ModuleType, RawImportRecord, ResolvedImportRecord,
};
use splitpack_ecmascript::EcmaCompiler;
use splitpack_error::BuildResult;
use splitpack_fs::OsFileSystem;
use splitpack_utils::{path_ext::PathExt, sanitize_file_name::sanitize_file_name};

use super::{
  ScanStageOutput,
  ast_scanner::{AstScanner, ScanResult},
  loaders::{AssetLoaders, AssetRegistry},
};
use crate::{
  types::{IndexEcmaAst, SharedOptions, SharedResolver},
  utils::{load_source::load_source, resolve_id::resolve_id},
};

/// A module whose import records are still being walked.
struct Frame {
  module: ModuleIdx,
  /// Chunk active for the module's declarations, the one that owns it.
  chunk: ChunkIdx,
  pending: std::vec::IntoIter<RawImportRecord>,
  resolved: Vec<ResolvedImportRecord>,
}

/// Depth-first discovery of every module reachable from the entry.
///
/// The traversal uses an explicit stack. A module is inserted into the table before any of its
/// imports is followed, so reaching it again through a cycle finds the record instead of
/// entering it twice.
pub struct ModuleLoader<'a> {
  fs: OsFileSystem,
  options: &'a SharedOptions,
  resolver: &'a SharedResolver,
  module_table: ModuleTable,
  index_ecma_ast: IndexEcmaAst,
  assets: AssetRegistry<'a>,
  stack: Vec<Frame>,
}

impl<'a> ModuleLoader<'a> {
  pub fn new(
    fs: OsFileSystem,
    options: &'a SharedOptions,
    resolver: &'a SharedResolver,
    loaders: &'a AssetLoaders,
  ) -> Self {
    Self {
      fs,
      options,
      resolver,
      module_table: ModuleTable::default(),
      index_ecma_ast: IndexEcmaAst::default(),
      assets: AssetRegistry::new(loaders),
      stack: vec![],
    }
  }

  pub fn fetch_all_modules(mut self) -> BuildResult<ScanStageOutput> {
    let entry_path = resolve_id(self.resolver, None, &self.options.input)?;
    let mut chunk_graph = ChunkGraph::new(self.module_table.next_idx(), chunk_name(&entry_path));
    self.enter_module(&mut chunk_graph, entry_path, ChunkIdx::ENTRY, true)?;

    while let Some(frame) = self.stack.last_mut() {
      let Some(raw) = frame.pending.next() else {
        if let Some(Frame { module, resolved, .. }) = self.stack.pop() {
          self.module_table.modules[module].import_records = resolved;
        }
        continue;
      };
      let (importer, active_chunk) = (frame.module, frame.chunk);
      let depth = self.stack.len() - 1;

      let target = self.resolve_record(&mut chunk_graph, importer, active_chunk, &raw)?;
      self.stack[depth].resolved.push(raw.into_resolved(target));
    }

    chunk_graph.hoist_shared_modules(&self.module_table.modules);

    Ok(ScanStageOutput {
      module_table: self.module_table,
      index_ecma_ast: self.index_ecma_ast,
      chunk_graph,
      assets: self.assets.into_assets(),
    })
  }

  fn resolve_record(
    &mut self,
    chunk_graph: &mut ChunkGraph,
    importer: ModuleIdx,
    active_chunk: ChunkIdx,
    raw: &RawImportRecord,
  ) -> BuildResult<ImportTarget> {
    let importer_path = self.module_table.modules[importer].id.as_arc_str().clone();
    let path = resolve_id(self.resolver, Some(Path::new(importer_path.as_str())), &raw.specifier)?;

    if ModuleType::from_path(Path::new(path.as_str()), self.options) == ModuleType::Asset {
      return Ok(ImportTarget::Asset(self.assets.load(&path)?));
    }

    let target = match (self.module_table.idx_of(&path), raw.kind) {
      (Some(existing), _) => existing,
      (None, ImportKind::Import) => self.enter_module(chunk_graph, path, active_chunk, false)?,
      (None, ImportKind::DynamicImport) => {
        let root = self.module_table.next_idx();
        let chunk = chunk_graph.add_chunk(active_chunk, root, chunk_name(&path));
        self.enter_module(chunk_graph, path, chunk, false)?
      }
    };

    self.module_table.modules[importer].dependencies.push(DependencyEdge::new(
      target,
      raw.kind,
      &raw.imported_names,
    ));
    Ok(ImportTarget::Module(target))
  }

  /// Reads, parses and registers a module owned by `chunk`, then schedules its imports.
  fn enter_module(
    &mut self,
    chunk_graph: &mut ChunkGraph,
    path: ArcStr,
    chunk: ChunkIdx,
    is_entry: bool,
  ) -> BuildResult<ModuleIdx> {
    let source = load_source(&self.fs, Path::new(path.as_str()))?;
    let ast = EcmaCompiler::parse(Path::new(path.as_str()), source)?;
    let ScanResult { import_records, exports_declared } = AstScanner::scan(ast.program());

    let idx = self.module_table.next_idx();
    let mut module = ModuleRecord::new(idx, ModuleId::new(path), &self.options.cwd, is_entry);
    module.exports_declared = exports_declared;
    tracing::debug!(module = module.stable_id.as_str(), chunk = chunk.raw(), "discovered module");

    self.module_table.insert(module);
    self.index_ecma_ast.push(ast);
    chunk_graph.assign(idx, chunk);
    self.stack.push(Frame {
      module: idx,
      chunk,
      pending: import_records.into_iter(),
      resolved: vec![],
    });
    Ok(idx)
  }
}

fn chunk_name(path: &str) -> ArcStr {
  sanitize_file_name(&Path::new(path).representative_file_name()).into()
}
