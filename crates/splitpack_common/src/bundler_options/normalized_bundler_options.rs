use std::path::PathBuf;

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub input: String,
  pub cwd: PathBuf,
  pub asset_extensions: Vec<String>,

  // --- Output
  pub dir: String,
  pub entry_filenames: String,
  pub chunk_filenames: String,
  pub asset_filenames: String,
  pub global_name: String,
}

impl NormalizedBundlerOptions {
  pub fn out_dir(&self) -> PathBuf {
    self.cwd.join(&self.dir)
  }

  pub fn is_asset_extension(&self, ext: &str) -> bool {
    self.asset_extensions.iter().any(|registered| registered.eq_ignore_ascii_case(ext))
  }
}
