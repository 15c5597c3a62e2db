#![allow(dead_code)]

use std::{
  path::{Path, PathBuf},
  process::Command,
};

use splitpack::{Bundler, BundlerOptions};
use splitpack_fs::{FileSystem, OsFileSystem};

/// A project laid out in a temporary directory.
pub struct Fixture {
  dir: tempfile::TempDir,
}

impl Fixture {
  pub fn new(files: &[(&str, &str)]) -> Self {
    let dir = tempfile::tempdir().unwrap();
    for (path, content) in files {
      OsFileSystem.write(&dir.path().join(path), content.as_bytes()).unwrap();
    }
    Self { dir }
  }

  pub fn root(&self) -> PathBuf {
    OsFileSystem.canonicalize(self.dir.path()).unwrap()
  }

  /// Canonical path of a fixture file, the key it has in the module table.
  pub fn path(&self, relative: &str) -> String {
    self.root().join(relative).to_string_lossy().into_owned()
  }

  pub fn write(&self, relative: &str, content: &str) {
    OsFileSystem.write(&self.root().join(relative), content.as_bytes()).unwrap();
  }

  pub fn bundler(&self, entry: &str) -> Bundler {
    Bundler::new(BundlerOptions {
      input: Some(entry.to_string()),
      cwd: Some(self.root()),
      ..Default::default()
    })
  }
}

pub fn node_available() -> bool {
  Command::new("node").arg("--version").output().is_ok_and(|output| output.status.success())
}

/// Runs `script` with node from `cwd` and returns its trimmed stdout.
pub fn run_node(cwd: &Path, script: &str) -> String {
  let output = Command::new("node").arg("-e").arg(script).current_dir(cwd).output().unwrap();
  assert!(output.status.success(), "node failed: {}", String::from_utf8_lossy(&output.stderr));
  String::from_utf8(output.stdout).unwrap().trim().to_string()
}
