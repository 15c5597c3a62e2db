mod impl_visit;

use arcstr::ArcStr;
use oxc::{
  ast::ast::{ImportDeclarationSpecifier, ModuleDeclaration, Program},
  ast_visit::Visit,
};
use splitpack_common::{ImportKind, RawImportRecord};
use splitpack_ecmascript::declaration_binding_identifiers;
use splitpack_utils::indexmap::FxIndexSet;

#[derive(Debug, Default)]
pub struct ScanResult {
  /// Static and dynamic imports in source order.
  pub import_records: Vec<RawImportRecord>,
  pub exports_declared: FxIndexSet<ArcStr>,
}

/// Collects what the graph builder needs from one module: the specifiers it imports and the names
/// it exports. Nothing is rewritten here.
#[derive(Default)]
pub struct AstScanner {
  result: ScanResult,
}

impl AstScanner {
  pub fn scan(program: &Program) -> ScanResult {
    let mut scanner = Self::default();
    scanner.visit_program(program);
    scanner.result
  }

  fn add_import_record(
    &mut self,
    specifier: &str,
    kind: ImportKind,
    imported_names: Vec<ArcStr>,
  ) {
    self.result.import_records.push(
      RawImportRecord::new(specifier.into(), kind).with_imported_names(imported_names),
    );
  }

  fn add_declared_export(&mut self, name: &str) {
    self.result.exports_declared.insert(name.into());
  }

  fn scan_module_decl(&mut self, decl: &ModuleDeclaration) {
    match decl {
      ModuleDeclaration::ImportDeclaration(decl) => {
        let imported_names = decl
          .specifiers
          .iter()
          .flatten()
          .map(|specifier| match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(spec) => spec.imported.name().as_str().into(),
            ImportDeclarationSpecifier::ImportDefaultSpecifier(_) => arcstr::literal!("default"),
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => arcstr::literal!("*"),
          })
          .collect();
        self.add_import_record(&decl.source.value, ImportKind::Import, imported_names);
      }
      ModuleDeclaration::ExportAllDeclaration(decl) => {
        match &decl.exported {
          Some(exported) => self.add_declared_export(&exported.name()),
          None => self.add_declared_export("*"),
        }
        self.add_import_record(
          &decl.source.value,
          ImportKind::Import,
          vec![arcstr::literal!("*")],
        );
      }
      ModuleDeclaration::ExportNamedDeclaration(decl) => {
        for specifier in &decl.specifiers {
          self.add_declared_export(&specifier.exported.name());
        }
        if let Some(declaration) = &decl.declaration {
          for ident in declaration_binding_identifiers(declaration) {
            self.add_declared_export(&ident.name);
          }
        }
        if let Some(source) = &decl.source {
          let imported_names =
            decl.specifiers.iter().map(|specifier| specifier.local.name().as_str().into()).collect();
          self.add_import_record(&source.value, ImportKind::Import, imported_names);
        }
      }
      ModuleDeclaration::ExportDefaultDeclaration(_) => self.add_declared_export("default"),
      _ => {}
    }
  }
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use splitpack_common::ImportKind;
  use splitpack_ecmascript::EcmaCompiler;

  use super::AstScanner;

  #[test]
  fn records_imports_in_source_order() {
    let ast = EcmaCompiler::parse(
      Path::new("/main.js"),
      "import d, { a as b } from './m';\n\
       const lazy = () => import('./lazy');\n\
       export * from './star';\n\
       import * as ns from 'pkg';\n\
       import './side';",
    )
    .unwrap();
    let result = AstScanner::scan(ast.program());

    let records = result
      .import_records
      .iter()
      .map(|record| (record.specifier.as_str(), record.kind, record.imported_names.join(",")))
      .collect::<Vec<_>>();
    assert_eq!(
      records,
      [
        ("./m", ImportKind::Import, "default,a".to_string()),
        ("./lazy", ImportKind::DynamicImport, String::new()),
        ("./star", ImportKind::Import, "*".to_string()),
        ("pkg", ImportKind::Import, "*".to_string()),
        ("./side", ImportKind::Import, String::new()),
      ]
    );
    assert_eq!(result.exports_declared.iter().map(|name| name.as_str()).collect::<Vec<_>>(), ["*"]);
  }

  #[test]
  fn collects_declared_exports() {
    let ast = EcmaCompiler::parse(
      Path::new("/m.js"),
      "export const a = 1, { b, c: [d] } = obj;\n\
       export function f() {}\n\
       export class K {}\n\
       const local = 1;\n\
       export { local as renamed, local as \"kebab-name\" };\n\
       export { x } from './x';\n\
       export * as ns from './ns';\n\
       export default f;",
    )
    .unwrap();
    let result = AstScanner::scan(ast.program());

    assert_eq!(
      result.exports_declared.iter().map(|name| name.as_str()).collect::<Vec<_>>(),
      ["a", "b", "d", "f", "K", "renamed", "kebab-name", "x", "ns", "default"]
    );
    assert_eq!(result.import_records.len(), 2);
    assert_eq!(result.import_records[0].imported_names, [arcstr::literal!("x")]);
  }

  #[test]
  fn ignores_dynamic_imports_of_computed_specifiers() {
    let ast =
      EcmaCompiler::parse(Path::new("/m.js"), "const name = 'a';\nimport(`./${name}`);").unwrap();
    assert!(AstScanner::scan(ast.program()).import_records.is_empty());
  }
}
