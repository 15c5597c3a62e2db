use std::{
  ffi::OsString,
  path::{Path, PathBuf},
};

use arcstr::ArcStr;
use dashmap::DashMap;
use sugar_path::SugarPath;

use splitpack_fs::{FileSystem, OsFileSystem};

use crate::{PackageJson, ResolveError};

const INDEX_FILE: &str = "index.js";
const PACKAGE_JSON: &str = "package.json";
const NODE_MODULES: &str = "node_modules";

#[derive(Debug)]
pub struct Resolver<F: FileSystem = OsFileSystem> {
  cwd: PathBuf,
  fs: F,
  // Results are stable within one build, so they are memoized by the importer's directory. Entry
  // lookups get their own slot since only they fall back to `./<specifier>`.
  cache: DashMap<CacheKey, ArcStr>,
}

impl<F: FileSystem> Resolver<F> {
  pub fn new(cwd: PathBuf, fs: F) -> Self {
    Self { cwd, fs, cache: DashMap::default() }
  }

  /// Maps `specifier`, as written in `importer`, to the canonical path of an existing file.
  ///
  /// Without an importer the specifier is an entry and resolves against `cwd`. An entry that is
  /// neither path-like nor an installed package is also tried as a path relative to `cwd`, so
  /// `src/main.js` works as an entry.
  pub fn resolve(&self, importer: Option<&Path>, specifier: &str) -> Result<ArcStr, ResolveError> {
    let dir = importer
      .and_then(Path::parent)
      .filter(|inner| inner.components().next().is_some())
      .unwrap_or(self.cwd.as_path());

    let key = CacheKey {
      dir: dir.to_path_buf(),
      specifier: specifier.to_string(),
      is_entry: importer.is_none(),
    };
    if let Some(cached) = self.cache.get(&key) {
      return Ok(cached.value().clone());
    }

    let mut resolution = self.resolve_in_dir(dir, specifier);

    if importer.is_none() && matches!(resolution, Err(ResolveError::NotFound { .. })) {
      let is_specifier_path_like = is_relative(specifier) || Path::new(specifier).is_absolute();
      if !is_specifier_path_like {
        let fallback = self.resolve_in_dir(dir, &format!("./{specifier}"));
        if fallback.is_ok() {
          resolution = fallback;
        }
      }
    }

    let resolved = resolution.map_err(|err| match err {
      ResolveError::NotFound { specifier, .. } => ResolveError::NotFound {
        specifier,
        importer: importer.map_or_else(|| self.cwd.clone(), Path::to_path_buf),
      },
      err => err,
    })?;

    tracing::debug!(specifier, dir = %dir.display(), resolved = %resolved, "resolved");
    self.cache.insert(key, resolved.clone());
    Ok(resolved)
  }

  fn resolve_in_dir(&self, dir: &Path, specifier: &str) -> Result<ArcStr, ResolveError> {
    let not_found =
      || ResolveError::NotFound { specifier: specifier.to_string(), importer: dir.to_path_buf() };

    let candidate = if Path::new(specifier).is_absolute() {
      PathBuf::from(specifier)
    } else if is_relative(specifier) {
      self.resolve_as_file_or_directory(&dir.join(specifier).normalize(), specifier)?
    } else {
      self.resolve_in_node_modules(dir, specifier)?.ok_or_else(not_found)?
    };

    if !self.fs.is_file(&candidate) {
      return Err(not_found());
    }

    let canonical = self
      .fs
      .canonicalize(&candidate)
      .map_err(|source| ResolveError::Io { path: candidate.clone(), source })?;
    Ok(canonical.to_string_lossy().as_ref().into())
  }

  /// `joined` is the specifier joined onto the importer's directory.
  ///
  /// A specifier with an extension is taken as is. Otherwise the directory conventions come
  /// first (`index.js`, then `package.json#main`) and `<path>.js` is the last resort, left for
  /// the caller's existence check.
  fn resolve_as_file_or_directory(
    &self,
    joined: &Path,
    specifier: &str,
  ) -> Result<PathBuf, ResolveError> {
    if Path::new(specifier).extension().is_some() {
      return Ok(joined.to_path_buf());
    }

    if let Some(from_dir) = self.resolve_as_directory(joined)? {
      return Ok(from_dir);
    }

    Ok(append_js_extension(joined))
  }

  fn resolve_as_directory(&self, dir: &Path) -> Result<Option<PathBuf>, ResolveError> {
    let index = dir.join(INDEX_FILE);
    if self.fs.is_file(&index) {
      return Ok(Some(index));
    }

    if let Some(package_json) = PackageJson::read(&self.fs, &dir.join(PACKAGE_JSON))? {
      let main = dir.join(package_json.main_or_default()).normalize();
      if self.fs.is_file(&main) {
        return Ok(Some(main));
      }
    }

    Ok(None)
  }

  /// Walks from `dir` outwards looking for `node_modules/<specifier>`. The first ancestor whose
  /// package manifest points at an existing file wins. Deep imports such as `lib/sub` fall back
  /// to file resolution inside the `node_modules` directory.
  fn resolve_in_node_modules(
    &self,
    dir: &Path,
    specifier: &str,
  ) -> Result<Option<PathBuf>, ResolveError> {
    for ancestor in dir.ancestors() {
      let node_modules = ancestor.join(NODE_MODULES);
      if !self.fs.is_dir(&node_modules) {
        continue;
      }

      let package_dir = node_modules.join(specifier).normalize();
      if let Some(package_json) = PackageJson::read(&self.fs, &package_dir.join(PACKAGE_JSON))? {
        let main = package_dir.join(package_json.main_or_default()).normalize();
        if self.fs.is_file(&main) {
          return Ok(Some(main));
        }
        continue;
      }

      let deep = self.resolve_as_file_or_directory(&package_dir, specifier)?;
      if self.fs.is_file(&deep) {
        return Ok(Some(deep));
      }
    }

    Ok(None)
  }
}

#[derive(Debug, PartialEq, Eq, Hash)]
struct CacheKey {
  dir: PathBuf,
  specifier: String,
  is_entry: bool,
}

fn is_relative(specifier: &str) -> bool {
  specifier.starts_with("./")
    || specifier.starts_with("../")
    || specifier == "."
    || specifier == ".."
}

fn append_js_extension(path: &Path) -> PathBuf {
  let mut raw = OsString::from(path.as_os_str());
  raw.push(".js");
  PathBuf::from(raw)
}
