use std::path::PathBuf;

use splitpack::{Bundler, BundlerOptions};

#[tokio::main]
async fn main() {
  let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("examples/basic");

  let bundler = Bundler::new(BundlerOptions {
    input: Some("./entry.js".to_string()),
    cwd: Some(root),
    ..Default::default()
  });

  match bundler.write().await {
    Ok(output) => {
      for chunk in &output.chunks {
        eprintln!("{} ({} modules)", chunk.filename, chunk.modules.len());
      }
      for warning in &output.warnings {
        eprintln!("warning: {warning}");
      }
    }
    Err(errors) => eprintln!("{errors}"),
  }
}
