mod build_diagnostic;
mod build_error;

pub use crate::{
  build_diagnostic::BuildDiagnostic,
  build_error::{BuildError, BuildResult},
};
