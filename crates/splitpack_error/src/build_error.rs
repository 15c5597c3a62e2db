use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

use crate::BuildDiagnostic;

/// Every diagnostic that stopped a build. A fatal diagnostic is usually alone in here, but the
/// vector is kept so callers can report all of them at once.
#[derive(Debug)]
pub struct BuildError(pub Vec<BuildDiagnostic>);

impl Deref for BuildError {
  type Target = Vec<BuildDiagnostic>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, diagnostic) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{diagnostic}")?;
    }
    Ok(())
  }
}

impl std::error::Error for BuildError {}

impl From<BuildDiagnostic> for BuildError {
  fn from(diagnostic: BuildDiagnostic) -> Self {
    Self(vec![diagnostic])
  }
}

impl From<Vec<BuildDiagnostic>> for BuildError {
  fn from(diagnostics: Vec<BuildDiagnostic>) -> Self {
    Self(diagnostics)
  }
}

pub type BuildResult<T> = Result<T, BuildError>;
