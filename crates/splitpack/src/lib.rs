mod bundler;
mod finalize_stage;
mod generate_stage;
mod scan_stage;
mod types;
mod utils;

pub use crate::{
  bundler::Bundler,
  scan_stage::{
    ScanStageOutput,
    loaders::{AssetLoader, CssLoader, FileLoader, SharedAssetLoader},
  },
  types::{bundle_output::BundleOutput, hot_update::HotUpdate},
};
pub use splitpack_common::*;
pub use splitpack_error::{BuildDiagnostic, BuildError, BuildResult};
