pub mod filename_template;
pub mod module_type;
pub mod normalized_bundler_options;

use std::path::PathBuf;

#[derive(Default, Debug, Clone)]
pub struct BundlerOptions {
  // --- Input
  /// Entry specifier, resolved from `cwd`.
  pub input: Option<String>,
  pub cwd: Option<PathBuf>,
  /// Extensions routed to the asset loaders instead of being parsed as scripts.
  pub asset_extensions: Option<Vec<String>>,

  // --- Output
  pub dir: Option<String>,
  pub entry_filenames: Option<String>,
  pub chunk_filenames: Option<String>,
  pub asset_filenames: Option<String>,
  /// Global through which non-entry chunks hand their modules to the entry loader.
  pub global_name: Option<String>,
}
