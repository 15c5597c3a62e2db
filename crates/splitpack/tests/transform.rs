mod common;

use common::Fixture;
use splitpack::{BuildDiagnostic, BundleOutput};

fn require(fixture: &Fixture, relative: &str) -> String {
  format!("require(\"{}\")", fixture.path(relative))
}

fn entry_code(output: &BundleOutput) -> &str {
  &output.entry().unwrap().code
}

#[test]
fn import_bindings_become_property_reads() {
  let fixture = Fixture::new(&[
    (
      "main.js",
      "import def, { named as local } from './dep';\n\
       import * as ns from './dep';\n\
       console.log(def, local, ns, { local });\n\
       function shadow(local) { return local; }\n\
       shadow(1);\n",
    ),
    ("dep.js", "export const named = 1;\nexport default 2;\n"),
  ]);

  let output = fixture.bundler("./main.js").build().unwrap();
  let code = entry_code(&output);
  let dep = require(&fixture, "dep.js");

  assert_eq!(code.matches(&format!("{dep};")).count(), 2);
  assert!(code.contains(&format!(
    "console.log({dep}.default, {dep}.named, {dep}, {{ local: {dep}.named }});"
  )));
  assert!(code.contains("function shadow(local) { return local; }"));
  assert!(!code.contains("import "));
  assert!(output.warnings.is_empty());
}

#[test]
fn exports_are_exposed_through_getters() {
  let fixture = Fixture::new(&[(
    "main.js",
    "export const a = 1, b = 2;\n\
     export function f() { return a; }\n\
     let c = 3;\n\
     export { c as renamed, c as 'not an ident' };\n\
     export default a + b;\n",
  )]);

  let output = fixture.bundler("./main.js").build().unwrap();
  let code = entry_code(&output);

  for (name, expr) in [("a", "a"), ("b", "b"), ("f", "f"), ("renamed", "c"), ("not an ident", "c")] {
    let getter =
      format!("Object.defineProperty(exports, \"{name}\", {{ enumerable: true, get: () => {expr} }});");
    assert!(code.contains(&getter), "missing getter for {name}");
  }
  assert!(code.contains("const a = 1, b = 2;"));
  assert!(code.contains("function f() { return a; }"));
  assert!(code.contains("exports.default = a + b;"));
  assert!(!code.contains("export "));
}

#[test]
fn named_default_declarations_keep_their_binding() {
  let fixture = Fixture::new(&[("main.js", "export default class Widget {}\nnew Widget();\n")]);

  let output = fixture.bundler("./main.js").build().unwrap();
  let code = entry_code(&output);

  assert!(code.contains("get: () => Widget"));
  assert!(code.contains("class Widget {}"));
  assert!(!code.contains("exports.default ="));
}

#[test]
fn re_exports_read_through_the_source_module() {
  let fixture = Fixture::new(&[
    (
      "main.js",
      "export { value as renamed, default as dep } from './dep';\n\
       export * as ns from './dep';\n\
       export * from './star';\n\
       export const own = 1;\n",
    ),
    ("dep.js", "export const value = 1;\nexport default 2;\n"),
    ("star.js", "export const fromStar = 3;\n"),
  ]);

  let output = fixture.bundler("./main.js").build().unwrap();
  let code = entry_code(&output);
  let dep = require(&fixture, "dep.js");
  let star = require(&fixture, "star.js");

  assert!(code.contains(&format!("get: () => {dep}.value }});")));
  assert!(code.contains(&format!("get: () => {dep}.default }});")));
  assert!(code.contains(&format!("\"ns\", {{ enumerable: true, get: () => {dep} }});")));
  assert!(code.contains(&format!(
    "require.exportStar(exports, {star}, [\"renamed\", \"dep\", \"ns\", \"own\"]);"
  )));
}

#[test]
fn imports_are_hoisted_in_source_order_after_the_getters() {
  let fixture = Fixture::new(&[
    (
      "main.js",
      "console.log('body');\n\
       import './dep';\n\
       export * from './star';\n\
       export { value } from './dep';\n\
       export const own = 1;\n",
    ),
    ("dep.js", "export const value = 1;\n"),
    ("star.js", "export const fromStar = 2;\n"),
  ]);

  let output = fixture.bundler("./main.js").build().unwrap();
  let code = entry_code(&output);
  let dep = require(&fixture, "dep.js");
  let star = require(&fixture, "star.js");
  let position = |needle: &str| code.find(needle).unwrap_or_else(|| panic!("missing {needle}"));

  let getter = position("Object.defineProperty(exports, \"own\"");
  let dep_require = position(&format!("\n{dep};\n"));
  let star_require = position(&format!("require.exportStar(exports, {star}"));
  let body = position("console.log('body');");
  assert!(getter < dep_require);
  assert!(dep_require < star_require);
  assert!(star_require < body);
  assert_eq!(code.matches(&format!("\n{dep};\n")).count(), 2);
}

#[test]
fn dynamic_imports_load_the_owner_chunk() {
  let fixture = Fixture::new(&[
    ("main.js", "export const open = () => import('./lazy');\n"),
    ("lazy.js", "export default 'lazy';\n"),
  ]);

  let output = fixture.bundler("./main.js").build().unwrap();

  assert_eq!(output.chunks.len(), 2);
  let lazy = require(&fixture, "lazy.js");
  assert!(entry_code(&output).contains(&format!("require.load(1).then(() => {lazy})")));
  let lazy_chunk = &output.chunks[1];
  assert!(!lazy_chunk.is_entry);
  assert!(lazy_chunk.filename.starts_with("lazy-"));
  assert!(lazy_chunk.code.contains(".install(chunkId, modules)"));
  assert!(entry_code(&output).contains(&format!("1: [0, \"{}\"]", lazy_chunk.filename)));
}

#[test]
fn asset_imports_turn_into_references() {
  let fixture = Fixture::new(&[
    (
      "main.js",
      "import './style.css';\nimport logo from './logo.svg';\nexport const src = logo;\n",
    ),
    ("style.css", "body { color: red; }\n"),
    ("logo.svg", "<svg/>"),
  ]);

  let output = fixture.bundler("./main.js").build().unwrap();
  let code = entry_code(&output);

  assert_eq!(output.assets.len(), 2);
  let css = output.assets.iter().find(|asset| asset.filename.ends_with(".css")).unwrap();
  assert!(css.filename.starts_with("assets/style-"));
  assert!(code.contains(&format!("require.asset(\"{}\");", css.filename)));
  assert!(code.contains("const src = \"logo.svg\";"));
  assert!(fixture.root().join("dist").join(&css.filename).is_file());
}

#[test]
fn unsupported_syntax_is_reported_and_left_alone() {
  let fixture = Fixture::new(&[(
    "main.js",
    "console.log(import.meta.url);\nconst name = './x.js';\nexport const load = () => import(name);\n",
  )]);

  let output = fixture.bundler("./main.js").build().unwrap();

  assert_eq!(output.warnings.len(), 2);
  assert!(output.warnings.iter().all(|warning| !warning.is_fatal()));
  assert!(matches!(
    &output.warnings[0],
    BuildDiagnostic::UnsupportedSyntax { kind, .. } if kind == "import.meta"
  ));
  let code = entry_code(&output);
  assert!(code.contains("import.meta.url"));
  assert!(code.contains("import(name)"));
}

#[test]
fn duplicate_import_binding_is_fatal() {
  let fixture = Fixture::new(&[
    ("main.js", "import { a } from './dep';\nimport { b as a } from './dep';\nconsole.log(a);\n"),
    ("dep.js", "export const a = 1, b = 2;\n"),
  ]);

  let error = fixture.bundler("./main.js").build().unwrap_err();

  assert_eq!(error.len(), 1);
  assert!(matches!(&error[0], BuildDiagnostic::DuplicateBinding { name, .. } if name == "a"));
}

#[test]
fn import_redeclared_by_a_local_is_fatal() {
  let fixture = Fixture::new(&[
    ("main.js", "import { a } from './dep';\nexport function a() {}\n"),
    ("dep.js", "export const a = 1;\n"),
  ]);

  let error = fixture.bundler("./main.js").build().unwrap_err();

  assert!(matches!(&error[0], BuildDiagnostic::DuplicateBinding { name, .. } if name == "a"));
}

#[test]
fn parse_errors_are_fatal() {
  let fixture = Fixture::new(&[("main.js", "import './dep';\n"), ("dep.js", "export const = ;\n")]);

  let error = fixture.bundler("./main.js").build().unwrap_err();

  assert!(matches!(&error[0], BuildDiagnostic::Parse { .. }));
}

#[test]
fn factories_are_strict_and_drop_the_hashbang() {
  let fixture = Fixture::new(&[("main.js", "#!/usr/bin/env node\nexport const x = 1;\n")]);

  let output = fixture.bundler("./main.js").build().unwrap();
  let code = entry_code(&output);

  assert!(code.contains(&format!(
    "\"{}\": function (exports, require) {{\n\"use strict\";\n",
    fixture.path("main.js")
  )));
  assert!(!code.contains("#!"));
}
