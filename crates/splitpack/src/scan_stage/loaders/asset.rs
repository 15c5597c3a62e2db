use std::path::Path;

use anyhow::Context;
use splitpack_fs::{FileSystem, OsFileSystem};

use super::AssetLoader;

/// Copies the file under its original name, directly into the output directory.
#[derive(Debug, Default)]
pub struct FileLoader<F: FileSystem = OsFileSystem> {
  fs: F,
}

impl<F: FileSystem> FileLoader<F> {
  pub fn new(fs: F) -> Self {
    Self { fs }
  }
}

impl<F: FileSystem> AssetLoader for FileLoader<F> {
  fn reference(&self, source: &Path) -> anyhow::Result<String> {
    let file_name = source
      .file_name()
      .with_context(|| format!("{} does not name a file", source.display()))?;
    Ok(file_name.to_string_lossy().into_owned())
  }

  fn emit(&self, source: &Path, reference: &str, out_dir: &Path) -> anyhow::Result<()> {
    self
      .fs
      .copy(source, &out_dir.join(reference))
      .with_context(|| format!("copying into {}", out_dir.display()))
  }
}
