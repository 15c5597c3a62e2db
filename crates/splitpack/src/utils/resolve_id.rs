use std::path::Path;

use arcstr::ArcStr;
use splitpack_error::BuildDiagnostic;
use splitpack_resolver::{ResolveError, Resolver};

/// Resolves `specifier` as written in `importer`, `None` for the entry.
pub fn resolve_id(
  resolver: &Resolver,
  importer: Option<&Path>,
  specifier: &str,
) -> Result<ArcStr, BuildDiagnostic> {
  resolver.resolve(importer, specifier).map_err(|err| match err {
    ResolveError::NotFound { specifier, importer } => {
      BuildDiagnostic::resolution(specifier, &importer)
    }
    ResolveError::InvalidPackageJson { path, source } => {
      BuildDiagnostic::parse(&path, source.to_string())
    }
    ResolveError::Io { path, source } => BuildDiagnostic::io(&path, source),
  })
}
