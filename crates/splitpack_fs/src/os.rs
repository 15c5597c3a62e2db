use std::{
  io,
  path::{Path, PathBuf},
};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path)
  }

  fn is_file(&self, path: &Path) -> bool {
    path.is_file()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
    dunce::canonicalize(path)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
  }

  fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
    if let Some(parent) = to.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(from, to).map(|_| ())
  }
}

#[cfg(test)]
mod tests {
  use super::{FileSystem, OsFileSystem};

  #[test]
  fn canonicalize_collapses_dot_segments() {
    let dir = tempfile::tempdir().unwrap();
    let fs = OsFileSystem;
    fs.write(&dir.path().join("src/a.js"), b"export {}").unwrap();

    let canonical = fs.canonicalize(&dir.path().join("src/../src/./a.js")).unwrap();
    assert_eq!(canonical, fs.canonicalize(&dir.path().join("src/a.js")).unwrap());
    assert!(fs.is_file(&canonical));
    assert!(fs.exists(&dir.path().join("src")));
    assert!(!fs.exists(&dir.path().join("src/b.js")));
  }

  #[test]
  fn copy_creates_missing_parents() {
    let dir = tempfile::tempdir().unwrap();
    let fs = OsFileSystem;
    fs.write(&dir.path().join("logo.svg"), b"<svg/>").unwrap();
    fs.copy(&dir.path().join("logo.svg"), &dir.path().join("dist/assets/logo.svg")).unwrap();
    assert_eq!(fs.read(&dir.path().join("dist/assets/logo.svg")).unwrap(), b"<svg/>");
  }
}
