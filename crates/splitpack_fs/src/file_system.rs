use std::{
  io,
  path::{Path, PathBuf},
};

/// Everything the bundler needs from a file system.
///
/// Reads are expected to be deterministic within one build, a vanished file is an error rather
/// than something to retry.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  fn is_file(&self, path: &Path) -> bool;

  fn is_dir(&self, path: &Path) -> bool;

  fn exists(&self, path: &Path) -> bool {
    self.is_file(path) || self.is_dir(path)
  }

  /// Absolute path with `.`/`..` removed and symlinks followed. Two paths naming the same file
  /// canonicalize to the same value.
  fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;
}
