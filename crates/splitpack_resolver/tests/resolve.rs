use std::path::{Path, PathBuf};

use splitpack_fs::{FileSystem, OsFileSystem};
use splitpack_resolver::{ResolveError, Resolver};

struct Fixture {
  dir: tempfile::TempDir,
}

impl Fixture {
  fn new(files: &[(&str, &str)]) -> Self {
    let dir = tempfile::tempdir().unwrap();
    for (path, content) in files {
      OsFileSystem.write(&dir.path().join(path), content.as_bytes()).unwrap();
    }
    Self { dir }
  }

  fn root(&self) -> PathBuf {
    OsFileSystem.canonicalize(self.dir.path()).unwrap()
  }

  fn resolver(&self) -> Resolver {
    Resolver::new(self.root(), OsFileSystem)
  }

  fn path(&self, relative: &str) -> String {
    self.root().join(relative).to_string_lossy().into_owned()
  }
}

fn resolve(fixture: &Fixture, importer: &str, specifier: &str) -> Result<String, ResolveError> {
  let importer = fixture.root().join(importer);
  fixture.resolver().resolve(Some(&importer), specifier).map(|path| path.to_string())
}

#[test]
fn relative_with_extension_is_used_as_is() {
  let fixture = Fixture::new(&[("main.js", ""), ("util.mjs", ""), ("util.mjs.js", "")]);
  assert_eq!(resolve(&fixture, "main.js", "./util.mjs").unwrap(), fixture.path("util.mjs"));
}

#[test]
fn relative_without_extension_appends_js() {
  let fixture = Fixture::new(&[("src/main.js", ""), ("lib/util.js", "")]);
  assert_eq!(resolve(&fixture, "src/main.js", "../lib/util").unwrap(), fixture.path("lib/util.js"));
}

#[test]
fn directory_index_wins_over_sibling_file() {
  let fixture = Fixture::new(&[("main.js", ""), ("x.js", ""), ("x/index.js", "")]);
  assert_eq!(resolve(&fixture, "main.js", "./x").unwrap(), fixture.path("x/index.js"));
}

#[test]
fn directory_main_wins_over_sibling_file() {
  let fixture = Fixture::new(&[
    ("main.js", ""),
    ("x.js", ""),
    ("x/package.json", r#"{ "main": "lib/entry.js" }"#),
    ("x/lib/entry.js", ""),
  ]);
  assert_eq!(resolve(&fixture, "main.js", "./x").unwrap(), fixture.path("x/lib/entry.js"));
}

#[test]
fn sibling_file_when_directory_has_no_entry() {
  let fixture = Fixture::new(&[("main.js", ""), ("x.js", ""), ("x/other.js", "")]);
  assert_eq!(resolve(&fixture, "main.js", "./x").unwrap(), fixture.path("x.js"));
}

#[test]
fn directory_index() {
  let fixture = Fixture::new(&[("main.js", ""), ("x/index.js", "")]);
  assert_eq!(resolve(&fixture, "main.js", "./x").unwrap(), fixture.path("x/index.js"));
}

#[test]
fn directory_package_json_main() {
  let fixture =
    Fixture::new(&[("main.js", ""), ("x/package.json", r#"{ "main": "lib/entry.js" }"#), ("x/lib/entry.js", "")]);
  assert_eq!(resolve(&fixture, "main.js", "./x").unwrap(), fixture.path("x/lib/entry.js"));
}

#[test]
fn index_wins_over_package_json_main() {
  let fixture = Fixture::new(&[
    ("main.js", ""),
    ("x/index.js", ""),
    ("x/package.json", r#"{ "main": "other.js" }"#),
    ("x/other.js", ""),
  ]);
  assert_eq!(resolve(&fixture, "main.js", "./x").unwrap(), fixture.path("x/index.js"));
}

#[test]
fn malformed_package_json_is_an_error() {
  let fixture = Fixture::new(&[("main.js", ""), ("x/package.json", "{ main: ")]);
  assert!(matches!(
    resolve(&fixture, "main.js", "./x"),
    Err(ResolveError::InvalidPackageJson { .. })
  ));
}

#[test]
fn package_lookup_walks_ancestors() {
  let fixture = Fixture::new(&[
    ("p/q/r/main.js", ""),
    ("p/node_modules/lib/package.json", r#"{ "main": "dist/lib.js" }"#),
    ("p/node_modules/lib/dist/lib.js", ""),
  ]);
  assert_eq!(
    resolve(&fixture, "p/q/r/main.js", "lib").unwrap(),
    fixture.path("p/node_modules/lib/dist/lib.js")
  );
}

#[test]
fn nearest_package_with_existing_main_wins() {
  let fixture = Fixture::new(&[
    ("p/q/main.js", ""),
    ("p/q/node_modules/lib/package.json", r#"{ "main": "missing.js" }"#),
    ("p/node_modules/lib/package.json", r#"{ "main": "found.js" }"#),
    ("p/node_modules/lib/found.js", ""),
  ]);
  assert_eq!(resolve(&fixture, "p/q/main.js", "lib").unwrap(), fixture.path("p/node_modules/lib/found.js"));
}

#[test]
fn missing_package_reports_specifier_and_importer() {
  let fixture = Fixture::new(&[("main.js", "")]);
  let err = resolve(&fixture, "main.js", "left-pad").unwrap_err();
  match err {
    ResolveError::NotFound { specifier, importer } => {
      assert_eq!(specifier, "left-pad");
      assert_eq!(importer, fixture.root().join("main.js"));
    }
    other => panic!("unexpected error {other:?}"),
  }
}

#[test]
fn missing_relative_file_fails() {
  let fixture = Fixture::new(&[("main.js", "")]);
  assert!(matches!(resolve(&fixture, "main.js", "./nope"), Err(ResolveError::NotFound { .. })));
}

#[test]
fn absolute_specifier_is_kept() {
  let fixture = Fixture::new(&[("main.js", ""), ("abs.js", "")]);
  let absolute = fixture.path("abs.js");
  assert_eq!(resolve(&fixture, "main.js", &absolute).unwrap(), absolute);
}

#[test]
fn entry_resolves_from_cwd() {
  let fixture = Fixture::new(&[("src/main.js", "")]);
  let resolver = fixture.resolver();
  assert_eq!(resolver.resolve(None, "./src/main.js").unwrap().as_str(), fixture.path("src/main.js"));
  assert_eq!(resolver.resolve(None, "src/main").unwrap().as_str(), fixture.path("src/main.js"));
  assert!(resolver.resolve(Some(Path::new("/nowhere/a.js")), "src/main").is_err());
}

#[test]
fn entry_fallback_does_not_leak_into_imports() {
  let fixture = Fixture::new(&[("main.js", ""), ("src/main.js", "")]);
  let resolver = fixture.resolver();
  assert_eq!(resolver.resolve(None, "src/main.js").unwrap().as_str(), fixture.path("src/main.js"));

  let importer = fixture.root().join("main.js");
  assert!(matches!(
    resolver.resolve(Some(&importer), "src/main.js"),
    Err(ResolveError::NotFound { .. })
  ));
}
