mod asset;
mod css;

use std::{path::Path, sync::Arc};

use arcstr::ArcStr;
use rustc_hash::FxHashMap;
use splitpack_common::{Asset, AssetIdx, FilenameTemplate, NormalizedBundlerOptions};
use splitpack_error::{BuildDiagnostic, BuildResult};
use splitpack_fs::OsFileSystem;
use splitpack_utils::path_ext::PathExt;

use crate::types::IndexAssets;

pub use self::{asset::FileLoader, css::CssLoader};

/// Places a non-script import target into the output directory.
///
/// `reference` names the copy relative to `out_dir`, with forward slashes, and is asked once per
/// distinct source path while scanning. `emit` writes the copy; the build calls it only after
/// every module transformed without a fatal diagnostic.
pub trait AssetLoader: Send + Sync {
  fn reference(&self, source: &Path) -> anyhow::Result<String>;

  fn emit(&self, source: &Path, reference: &str, out_dir: &Path) -> anyhow::Result<()>;
}

pub type SharedAssetLoader = Arc<dyn AssetLoader>;

/// Loaders keyed by lowercase extension, `FileLoader` for everything else.
#[derive(Clone)]
pub struct AssetLoaders {
  by_extension: FxHashMap<String, SharedAssetLoader>,
  fallback: SharedAssetLoader,
}

impl AssetLoaders {
  pub fn new(options: &NormalizedBundlerOptions) -> Self {
    let css: SharedAssetLoader =
      Arc::new(CssLoader::new(OsFileSystem, FilenameTemplate::new(options.asset_filenames.clone())));
    let mut by_extension = FxHashMap::default();
    by_extension.insert("css".to_string(), css);
    Self { by_extension, fallback: Arc::new(FileLoader::new(OsFileSystem)) }
  }

  pub fn register(&mut self, extension: &str, loader: SharedAssetLoader) {
    self.by_extension.insert(extension.trim_start_matches('.').to_ascii_lowercase(), loader);
  }

  fn loader_for(&self, path: &Path) -> &dyn AssetLoader {
    self.by_extension.get(&path.extension_lowercase()).unwrap_or(&self.fallback).as_ref()
  }

  /// Writes every asset of a finished scan under `out_dir`.
  pub fn emit_all(&self, assets: &IndexAssets, out_dir: &Path) -> BuildResult<()> {
    for asset in assets.iter() {
      let source = Path::new(asset.source.as_str());
      self
        .loader_for(source)
        .emit(source, &asset.reference, out_dir)
        .map_err(|reason| BuildDiagnostic::asset_loader(source, reason))?;
      tracing::debug!(source = %asset.source, reference = %asset.reference, "emitted asset");
    }
    Ok(())
  }
}

/// Assets met during one scan, deduplicated by canonical source path. Nothing is written here.
pub struct AssetRegistry<'a> {
  loaders: &'a AssetLoaders,
  by_path: FxHashMap<ArcStr, AssetIdx>,
  by_reference: FxHashMap<String, AssetIdx>,
  assets: IndexAssets,
}

impl<'a> AssetRegistry<'a> {
  pub fn new(loaders: &'a AssetLoaders) -> Self {
    Self {
      loaders,
      by_path: FxHashMap::default(),
      by_reference: FxHashMap::default(),
      assets: IndexAssets::default(),
    }
  }

  pub fn load(&mut self, source: &ArcStr) -> Result<AssetIdx, BuildDiagnostic> {
    if let Some(idx) = self.by_path.get(source) {
      return Ok(*idx);
    }

    let path = Path::new(source.as_str());
    let reference = self
      .loaders
      .loader_for(path)
      .reference(path)
      .map_err(|reason| BuildDiagnostic::asset_loader(path, reason))?;
    tracing::debug!(source = %source, reference, "loaded asset");

    let idx = self.assets.next_idx();
    if let Some(previous) = self.by_reference.insert(reference.clone(), idx) {
      tracing::warn!(
        source = %source,
        previous = %self.assets[previous].source,
        reference,
        "two assets share one output name, the last one written wins"
      );
    }
    self.assets.push(Asset { idx, source: source.clone(), reference });
    self.by_path.insert(source.clone(), idx);
    Ok(idx)
  }

  pub fn into_assets(self) -> IndexAssets {
    self.assets
  }
}
