use std::{borrow::Cow, ffi::OsStr, path::Path};

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_str(&self) -> &str;

  fn expect_to_slash(&self) -> String;

  /// Lowercased extension without the dot, empty if there is none.
  fn extension_lowercase(&self) -> String;

  fn representative_file_name(&self) -> Cow<str>;
}

impl PathExt for Path {
  fn expect_to_str(&self) -> &str {
    self.to_str().unwrap_or_else(|| {
      panic!("Failed to convert {:?} to valid utf8 str", self.display());
    })
  }

  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  fn extension_lowercase(&self) -> String {
    self.extension().map(|ext| ext.to_string_lossy().to_ascii_lowercase()).unwrap_or_default()
  }

  /// Chunk names come from here. `lazy/index.js` is named after its directory.
  fn representative_file_name(&self) -> Cow<str> {
    let file_name =
      self.file_stem().map_or_else(|| self.to_string_lossy(), OsStr::to_string_lossy);

    if file_name == "index" {
      if let Some(dir_name) = self.parent().and_then(Path::file_name) {
        return dir_name.to_string_lossy();
      }
    }

    file_name
  }
}

#[test]
fn test_representative_file_name() {
  let cwd = Path::new(".").join("project");
  assert_eq!(cwd.join("src").join("page.js").representative_file_name(), "page");
  assert_eq!(cwd.join("lazy").join("index.js").representative_file_name(), "lazy");
}

#[test]
fn test_extension_lowercase() {
  assert_eq!(Path::new("/a/Logo.PNG").extension_lowercase(), "png");
  assert_eq!(Path::new("/a/LICENSE").extension_lowercase(), "");
}
