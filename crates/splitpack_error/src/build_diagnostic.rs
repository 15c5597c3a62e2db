use std::path::Path;

/// The diagnostic taxonomy of a build.
///
/// Everything except [`BuildDiagnostic::UnsupportedSyntax`] is fatal: it aborts the build and no
/// artifact is produced. Unsupported syntax only degrades the module it was found in and is
/// reported next to the otherwise successful output.
#[derive(Debug, thiserror::Error)]
pub enum BuildDiagnostic {
  #[error("Could not resolve \"{specifier}\" from \"{importer}\"")]
  Resolution { specifier: String, importer: String },

  #[error("Failed to parse \"{path}\": {message}")]
  Parse { path: String, message: String },

  #[error("Identifier `{name}` is bound by more than one import in \"{path}\"")]
  DuplicateBinding { path: String, name: String },

  #[error("Unsupported syntax `{kind}` in \"{path}\" at {start}..{end}, it is left untouched")]
  UnsupportedSyntax { path: String, kind: String, start: u32, end: u32 },

  #[error("Could not read \"{path}\": {source}")]
  Io { path: String, source: std::io::Error },

  #[error("Asset loader failed on \"{path}\": {reason:#}")]
  AssetLoader { path: String, reason: anyhow::Error },
}

impl BuildDiagnostic {
  pub fn resolution(specifier: impl Into<String>, importer: &Path) -> Self {
    Self::Resolution { specifier: specifier.into(), importer: importer.display().to_string() }
  }

  pub fn parse(path: &Path, message: impl Into<String>) -> Self {
    Self::Parse { path: path.display().to_string(), message: message.into() }
  }

  pub fn duplicate_binding(path: &Path, name: impl Into<String>) -> Self {
    Self::DuplicateBinding { path: path.display().to_string(), name: name.into() }
  }

  pub fn unsupported_syntax(path: &Path, kind: impl Into<String>, start: u32, end: u32) -> Self {
    Self::UnsupportedSyntax { path: path.display().to_string(), kind: kind.into(), start, end }
  }

  pub fn io(path: &Path, source: std::io::Error) -> Self {
    Self::Io { path: path.display().to_string(), source }
  }

  pub fn asset_loader(path: &Path, reason: anyhow::Error) -> Self {
    Self::AssetLoader { path: path.display().to_string(), reason }
  }

  pub fn is_fatal(&self) -> bool {
    !matches!(self, Self::UnsupportedSyntax { .. })
  }
}
