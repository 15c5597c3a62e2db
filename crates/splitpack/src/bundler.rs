use std::{path::Path, sync::Arc};

use futures::future::try_join_all;
use splitpack_common::{BundlerOptions, ImportKind, ImportTarget, NormalizedBundlerOptions};
use splitpack_ecmascript::EcmaCompiler;
use splitpack_error::{BuildDiagnostic, BuildResult};
use splitpack_fs::{FileSystem, OsFileSystem};
use splitpack_resolver::Resolver;
use splitpack_utils::concat_string;

use crate::{
  finalize_stage::{FinalizeStage, FinalizerContext, finalize_module},
  generate_stage::{GenerateStage, render_factory, runtime::update_runtime},
  scan_stage::{
    ScanStage, ScanStageOutput,
    ast_scanner::AstScanner,
    loaders::{AssetLoaders, SharedAssetLoader},
  },
  types::{SharedOptions, SharedResolver, bundle_output::BundleOutput, hot_update::HotUpdate},
  utils::{load_source::load_source, normalize_options::normalize_options, resolve_id::resolve_id},
};

/// The build context. Every build starts from a fresh resolver and module table, so several
/// bundlers can run in one process without sharing state.
pub struct Bundler {
  fs: OsFileSystem,
  options: SharedOptions,
  asset_loaders: AssetLoaders,
}

impl Bundler {
  pub fn new(options: BundlerOptions) -> Self {
    let options = normalize_options(options);
    let asset_loaders = AssetLoaders::new(&options);
    Self { fs: OsFileSystem, options: Arc::new(options), asset_loaders }
  }

  /// Routes imports of `extension` to `loader`. The extension must also be listed in
  /// `asset_extensions` to be treated as an asset.
  #[must_use]
  pub fn with_asset_loader(mut self, extension: &str, loader: SharedAssetLoader) -> Self {
    self.asset_loaders.register(extension, loader);
    self
  }

  pub fn options(&self) -> &NormalizedBundlerOptions {
    &self.options
  }

  fn create_resolver(&self) -> SharedResolver {
    Arc::new(Resolver::new(self.options.cwd.clone(), self.fs))
  }

  /// Discovers every module and chunk reachable from the entry. Assets get their output names
  /// here but nothing is written.
  pub fn scan(&self) -> BuildResult<ScanStageOutput> {
    let resolver = self.create_resolver();
    ScanStage::new(self.fs, &self.options, &resolver, &self.asset_loaders).scan()
  }

  /// Builds every chunk in memory and copies the assets into the output directory. Nothing is
  /// produced if any fatal diagnostic occurs.
  pub fn build(&self) -> BuildResult<BundleOutput> {
    let _span = tracing::info_span!("build", entry = self.options.input.as_str()).entered();

    let scan_output = self.scan()?;
    let finalized = FinalizeStage::new(&scan_output).finalize()?;
    self.asset_loaders.emit_all(&scan_output.assets, &self.options.out_dir())?;
    let output = GenerateStage::new(&scan_output, &self.options).generate(finalized);

    tracing::info!(
      modules = scan_output.module_table.len(),
      chunks = output.chunks.len(),
      warnings = output.warnings.len(),
      "build finished"
    );
    Ok(output)
  }

  /// [`Bundler::build`], then writes every chunk under the output directory.
  pub async fn write(&self) -> BuildResult<BundleOutput> {
    let output = self.build()?;
    let out_dir = self.options.out_dir();

    try_join_all(output.chunks.iter().map(|chunk| {
      let path = out_dir.join(&chunk.filename);
      async move {
        if let Some(parent) = path.parent() {
          tokio::fs::create_dir_all(parent).await.map_err(|err| BuildDiagnostic::io(parent, err))?;
        }
        tokio::fs::write(&path, chunk.code.as_bytes())
          .await
          .map_err(|err| BuildDiagnostic::io(&path, err))
      }
    }))
    .await?;

    Ok(output)
  }

  /// Re-reads one module of a frozen scan and renders a patch for the running loader.
  ///
  /// Returns [`HotUpdate::NeedsRebuild`] when the file is not part of the graph, or when its new
  /// imports reach something the graph cannot serve as is: an unknown file, or a module the
  /// owning chunk cannot statically require.
  pub fn retransform(&self, scan_output: &ScanStageOutput, path: &Path) -> BuildResult<HotUpdate> {
    let ScanStageOutput { module_table, chunk_graph, assets, .. } = scan_output;
    let canonical = self.fs.canonicalize(path).map_err(|err| BuildDiagnostic::io(path, err))?;
    let Some(idx) = module_table.idx_of(&canonical.to_string_lossy()) else {
      return Ok(HotUpdate::NeedsRebuild);
    };
    let module = &module_table.modules[idx];
    let Some(chunk_idx) = chunk_graph.owner_of(idx) else {
      return Ok(HotUpdate::NeedsRebuild);
    };

    let ast = EcmaCompiler::parse(module.path(), load_source(&self.fs, module.path())?)?;
    let resolver = self.create_resolver();
    let mut ctx = FinalizerContext::new(module, &module_table.modules, chunk_graph, assets);
    ctx.import_targets.clear();

    for record in AstScanner::scan(ast.program()).import_records {
      let resolved = resolve_id(&resolver, Some(module.path()), &record.specifier)?;
      let target = if let Some(target_idx) = module_table.idx_of(&resolved) {
        let servable = record.kind == ImportKind::DynamicImport
          || chunk_graph
            .owner_of(target_idx)
            .is_some_and(|owner| chunk_graph.is_ancestor_or_self(owner, chunk_idx));
        if !servable {
          return Ok(HotUpdate::NeedsRebuild);
        }
        ImportTarget::Module(target_idx)
      } else if let Some(asset) = assets.iter().find(|asset| asset.source == resolved) {
        ImportTarget::Asset(asset.idx)
      } else {
        return Ok(HotUpdate::NeedsRebuild);
      };
      ctx.import_targets.insert(record.specifier, target);
    }

    let (body, warnings) = finalize_module(&ctx, &ast)?;
    let code = concat_string!(
      update_runtime(&self.options.global_name),
      "({\n",
      render_factory(&module.id, &body),
      "\n});\n"
    );
    tracing::debug!(module = module.stable_id.as_str(), chunk = chunk_idx.raw(), "re-transformed");

    Ok(HotUpdate::Patch { chunk_idx, path: module.id.clone(), code, warnings })
  }
}
