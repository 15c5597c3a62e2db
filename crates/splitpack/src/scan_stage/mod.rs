pub mod ast_scanner;
pub mod loaders;

mod module_loader;

use splitpack_common::{ChunkGraph, ModuleTable};
use splitpack_error::BuildResult;
use splitpack_fs::OsFileSystem;

use self::{loaders::AssetLoaders, module_loader::ModuleLoader};
use crate::types::{IndexAssets, IndexEcmaAst, SharedOptions, SharedResolver};

/// The frozen result of discovery. Nothing is inserted after the scan returns.
#[derive(Debug)]
pub struct ScanStageOutput {
  pub module_table: ModuleTable,
  pub index_ecma_ast: IndexEcmaAst,
  pub chunk_graph: ChunkGraph,
  pub assets: IndexAssets,
}

pub struct ScanStage<'a> {
  fs: OsFileSystem,
  options: &'a SharedOptions,
  resolver: &'a SharedResolver,
  loaders: &'a AssetLoaders,
}

impl<'a> ScanStage<'a> {
  pub fn new(
    fs: OsFileSystem,
    options: &'a SharedOptions,
    resolver: &'a SharedResolver,
    loaders: &'a AssetLoaders,
  ) -> Self {
    Self { fs, options, resolver, loaders }
  }

  pub fn scan(&self) -> BuildResult<ScanStageOutput> {
    ModuleLoader::new(self.fs, self.options, self.resolver, self.loaders).fetch_all_modules()
  }
}
