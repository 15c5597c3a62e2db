use std::path::Path;

use anyhow::Context;
use splitpack_common::{FilenameTemplate, FilenameTemplateArgs};
use splitpack_fs::{FileSystem, OsFileSystem};
use splitpack_utils::{sanitize_file_name::sanitize_file_name, xxhash::short_hash};

use super::AssetLoader;

/// Copies a stylesheet under a content-addressed name, so two stylesheets with the same file name
/// never collide in the output directory.
#[derive(Debug)]
pub struct CssLoader<F: FileSystem = OsFileSystem> {
  fs: F,
  template: FilenameTemplate,
}

impl<F: FileSystem> CssLoader<F> {
  pub fn new(fs: F, template: FilenameTemplate) -> Self {
    Self { fs, template }
  }
}

impl<F: FileSystem> AssetLoader for CssLoader<F> {
  fn reference(&self, source: &Path) -> anyhow::Result<String> {
    let content = self.fs.read(source).with_context(|| format!("reading {}", source.display()))?;
    let name = source.file_stem().map(|stem| sanitize_file_name(&stem.to_string_lossy()));
    let hash = short_hash(&content, 8);
    Ok(self.template.render(&FilenameTemplateArgs {
      name: Some(name.as_deref().unwrap_or("style")),
      hash: Some(&hash),
      extname: Some(".css"),
      id: None,
    }))
  }

  fn emit(&self, source: &Path, reference: &str, out_dir: &Path) -> anyhow::Result<()> {
    let content = self.fs.read(source).with_context(|| format!("reading {}", source.display()))?;
    self
      .fs
      .write(&out_dir.join(reference), &content)
      .with_context(|| format!("writing {reference} into {}", out_dir.display()))
  }
}
