use std::path::Path;

use splitpack_common::{BundlerOptions, NormalizedBundlerOptions};
use sugar_path::SugarPath;

const DEFAULT_ASSET_EXTENSIONS: [&str; 11] =
  ["css", "png", "jpg", "jpeg", "gif", "svg", "webp", "woff", "woff2", "ttf", "txt"];

pub fn normalize_options(raw_options: BundlerOptions) -> NormalizedBundlerOptions {
  NormalizedBundlerOptions {
    input: raw_options.input.unwrap_or_else(|| "./index.js".to_string()),
    cwd: raw_options.cwd.unwrap_or_else(|| Path::new(".").absolutize()),
    asset_extensions: raw_options.asset_extensions.map_or_else(
      || DEFAULT_ASSET_EXTENSIONS.iter().map(ToString::to_string).collect(),
      |extensions| {
        extensions.into_iter().map(|ext| ext.trim_start_matches('.').to_ascii_lowercase()).collect()
      },
    ),
    dir: raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    entry_filenames: raw_options.entry_filenames.unwrap_or_else(|| "[name].js".to_string()),
    chunk_filenames: raw_options.chunk_filenames.unwrap_or_else(|| "[name]-[hash].js".to_string()),
    asset_filenames: raw_options
      .asset_filenames
      .unwrap_or_else(|| "assets/[name]-[hash][extname]".to_string()),
    global_name: raw_options.global_name.unwrap_or_else(|| "__splitpack_chunks__".to_string()),
  }
}
