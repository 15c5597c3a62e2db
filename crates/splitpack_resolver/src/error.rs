use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
  #[error("Could not resolve \"{specifier}\" from \"{}\"", importer.display())]
  NotFound { specifier: String, importer: PathBuf },

  #[error("Invalid package.json \"{}\": {source}", path.display())]
  InvalidPackageJson { path: PathBuf, source: serde_json::Error },

  #[error("Could not read \"{}\": {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
}
