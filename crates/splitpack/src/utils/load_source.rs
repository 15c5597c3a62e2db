use std::path::Path;

use splitpack_error::BuildDiagnostic;
use splitpack_fs::FileSystem;

/// Reads a script module. A file that resolved but can no longer be read is fatal.
pub fn load_source(fs: &dyn FileSystem, path: &Path) -> Result<String, BuildDiagnostic> {
  fs.read_to_string(path).map_err(|source| BuildDiagnostic::io(path, source))
}
