mod impl_visit;

use std::path::Path;

use oxc::{
  ast::ast::{
    ExportDefaultDeclaration, ExportDefaultDeclarationKind, ExportNamedDeclaration,
    IdentifierReference, ImportDeclaration, ImportDeclarationSpecifier, ModuleDeclaration,
    ModuleExportName, Program, StringLiteral,
  },
  ast_visit::Visit,
  semantic::{Scoping, SymbolId},
  span::{GetSpan, Span},
};
use rustc_hash::{FxHashMap, FxHashSet};
use splitpack_common::ImportTarget;
use splitpack_ecmascript::declaration_binding_identifiers;
use splitpack_error::BuildDiagnostic;
use splitpack_utils::{
  concat_string,
  ecmascript::{property_access_str, quote},
};
use string_wizard::MagicString;

use super::finalizer_context::FinalizerContext;

/// Rewrites one module into the body of a `(exports, require)` factory.
///
/// Edits are applied to the original text by span. Import declarations turn into `require`
/// calls hoisted above the body in source order, references to import bindings are replaced by
/// property reads on `require(..)`, and exported locals are exposed through getters installed
/// before anything else runs.
pub struct IsolatingModuleFinalizer<'me, 'ast> {
  pub ctx: &'me FinalizerContext<'me>,
  pub scoping: &'me Scoping,
  pub magic_string: MagicString<'ast>,
  /// Import binding to the expression that replaces each reference to it.
  pub scope_map: FxHashMap<SymbolId, String>,
  /// Explicit export names, `export *` never overrides these.
  pub own_export_names: Vec<String>,
  pub getters: Vec<(String, String)>,
  /// Statements standing in for import-like declarations, run after the getters.
  pub hoisted: Vec<String>,
  pub warnings: Vec<BuildDiagnostic>,
}

impl<'me, 'ast> IsolatingModuleFinalizer<'me, 'ast> {
  pub fn new(ctx: &'me FinalizerContext<'me>, scoping: &'me Scoping, source: &'ast str) -> Self {
    Self {
      ctx,
      scoping,
      magic_string: MagicString::new(source),
      scope_map: FxHashMap::default(),
      own_export_names: vec![],
      getters: vec![],
      hoisted: vec![],
      warnings: vec![],
    }
  }

  /// Produces the factory body, or the fatal diagnostic that stops the build.
  pub fn finalize(
    mut self,
    program: &Program<'ast>,
  ) -> Result<(String, Vec<BuildDiagnostic>), BuildDiagnostic> {
    self.check_import_bindings(program)?;
    self.own_export_names = explicit_export_names(program);

    if let Some(hashbang) = &program.hashbang {
      self.remove(hashbang.span);
    }
    self.register_import_bindings(program)?;
    self.visit_program(program);

    let mut prologue = self
      .getters
      .iter()
      .map(|(name, expr)| {
        concat_string!(
          "Object.defineProperty(exports, ",
          quote(name),
          ", { enumerable: true, get: () => ",
          expr,
          " });\n"
        )
      })
      .collect::<String>();
    for statement in &self.hoisted {
      prologue.push_str(statement);
      prologue.push('\n');
    }
    if !prologue.is_empty() {
      self.magic_string.prepend(prologue);
    }

    Ok((self.magic_string.to_string(), self.warnings))
  }

  fn path(&self) -> &Path {
    self.ctx.module.path()
  }

  fn update(&mut self, span: Span, content: String) {
    self.magic_string.update(span.start as usize, span.end as usize, content);
  }

  fn remove(&mut self, span: Span) {
    if !span.is_empty() {
      self.magic_string.remove(span.start as usize, span.end as usize);
    }
  }

  /// Moves the statement replacing `span` to the top of the body.
  fn hoist(&mut self, span: Span, statement: String) {
    self.remove(span);
    self.hoisted.push(statement);
  }

  fn unsupported(&mut self, kind: &str, span: Span) {
    let diagnostic = BuildDiagnostic::unsupported_syntax(self.path(), kind, span.start, span.end);
    tracing::warn!("{diagnostic}");
    self.warnings.push(diagnostic);
  }

  fn target_of(&self, source: &StringLiteral) -> Result<ImportTarget, BuildDiagnostic> {
    self
      .ctx
      .import_targets
      .get(source.value.as_str())
      .copied()
      .ok_or_else(|| BuildDiagnostic::resolution(source.value.as_str(), self.path()))
  }

  /// `require("<canonical path>")` for a module target.
  fn require_expr(&self, target: ImportTarget) -> Option<String> {
    target.as_module().map(|idx| concat_string!("require(", quote(&self.ctx.modules[idx].id), ")"))
  }

  fn asset_reference(&self, target: ImportTarget) -> Option<&'me str> {
    let ctx = self.ctx;
    match target {
      ImportTarget::Asset(idx) => Some(ctx.assets[idx].reference.as_str()),
      ImportTarget::Module(_) => None,
    }
  }

  pub fn replacement_for(&self, ident: &IdentifierReference) -> Option<&String> {
    let reference_id = ident.reference_id.get()?;
    let symbol_id = self.scoping.get_reference(reference_id).symbol_id()?;
    self.scope_map.get(&symbol_id)
  }

  fn add_getter(&mut self, name: &str, expr: String) {
    self.getters.push((name.to_string(), expr));
  }

  /// A module-level name may be bound by at most one import, and not by any other declaration.
  fn check_import_bindings(&self, program: &Program<'ast>) -> Result<(), BuildDiagnostic> {
    let mut import_locals = FxHashSet::default();
    for stmt in &program.body {
      if let Some(ModuleDeclaration::ImportDeclaration(decl)) = stmt.as_module_declaration() {
        for specifier in decl.specifiers.iter().flatten() {
          let name = specifier.local().name.as_str();
          if !import_locals.insert(name) {
            return Err(BuildDiagnostic::duplicate_binding(self.path(), name));
          }
        }
      }
    }

    for stmt in &program.body {
      let declaration = match stmt.as_module_declaration() {
        Some(ModuleDeclaration::ExportNamedDeclaration(decl)) => decl.declaration.as_ref(),
        Some(_) => None,
        None => stmt.as_declaration(),
      };
      for ident in declaration.into_iter().flat_map(declaration_binding_identifiers) {
        if import_locals.contains(ident.name.as_str()) {
          return Err(BuildDiagnostic::duplicate_binding(self.path(), ident.name.as_str()));
        }
      }
    }
    Ok(())
  }

  /// Fills the scope map before any reference is visited, imports are hoisted.
  fn register_import_bindings(&mut self, program: &Program<'ast>) -> Result<(), BuildDiagnostic> {
    for stmt in &program.body {
      let Some(ModuleDeclaration::ImportDeclaration(decl)) = stmt.as_module_declaration() else {
        continue;
      };
      let target = self.target_of(&decl.source)?;
      for specifier in decl.specifiers.iter().flatten() {
        let replacement = if let Some(require_expr) = self.require_expr(target) {
          match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(spec) => {
              property_access_str(&require_expr, &spec.imported.name())
            }
            ImportDeclarationSpecifier::ImportDefaultSpecifier(_) => {
              concat_string!(require_expr, ".default")
            }
            ImportDeclarationSpecifier::ImportNamespaceSpecifier(_) => require_expr,
          }
        } else if let (Some(reference), ImportDeclarationSpecifier::ImportDefaultSpecifier(_)) =
          (self.asset_reference(target), specifier)
        {
          quote(reference)
        } else {
          continue;
        };
        if let Some(symbol_id) = specifier.local().symbol_id.get() {
          self.scope_map.insert(symbol_id, replacement);
        }
      }
    }
    Ok(())
  }

  pub fn finalize_module_decl(&mut self, decl: &ModuleDeclaration<'ast>) {
    match decl {
      ModuleDeclaration::ImportDeclaration(decl) => self.finalize_import_decl(decl),
      ModuleDeclaration::ExportAllDeclaration(decl) => {
        let Some(require_expr) = self.target_of(&decl.source).ok().and_then(|t| self.require_expr(t))
        else {
          self.unsupported("export * from <asset>", decl.span);
          return;
        };
        match &decl.exported {
          Some(exported) => {
            self.add_getter(&exported.name(), require_expr.clone());
            self.hoist(decl.span, concat_string!(require_expr, ";"));
          }
          None => {
            let own = self.own_export_names.iter().map(|name| quote(name)).collect::<Vec<_>>();
            self.hoist(
              decl.span,
              concat_string!(
                "require.exportStar(exports, ",
                require_expr,
                ", [",
                own.join(", "),
                "]);"
              ),
            );
          }
        }
      }
      ModuleDeclaration::ExportNamedDeclaration(decl) => self.finalize_export_named_decl(decl),
      ModuleDeclaration::ExportDefaultDeclaration(decl) => {
        self.finalize_export_default_decl(decl);
      }
      ModuleDeclaration::TSExportAssignment(_) | ModuleDeclaration::TSNamespaceExportDeclaration(_) => {
        self.unsupported("typescript export", decl.span());
      }
    }
  }

  fn finalize_import_decl(&mut self, decl: &ImportDeclaration<'ast>) {
    let Ok(target) = self.target_of(&decl.source) else { return };
    if let Some(require_expr) = self.require_expr(target) {
      self.hoist(decl.span, concat_string!(require_expr, ";"));
      return;
    }

    let only_default = decl.specifiers.iter().flatten().all(|specifier| {
      matches!(specifier, ImportDeclarationSpecifier::ImportDefaultSpecifier(_))
    });
    match self.asset_reference(target) {
      Some(reference) if only_default => {
        let content = concat_string!("require.asset(", quote(reference), ");");
        self.hoist(decl.span, content);
      }
      _ => self.unsupported("named import of an asset", decl.span),
    }
  }

  fn finalize_export_named_decl(&mut self, decl: &ExportNamedDeclaration<'ast>) {
    if let Some(source) = &decl.source {
      let Some(require_expr) = self.target_of(source).ok().and_then(|t| self.require_expr(t)) else {
        self.unsupported("export from <asset>", decl.span);
        return;
      };
      for specifier in &decl.specifiers {
        let expr = property_access_str(&require_expr, &specifier.local.name());
        self.add_getter(&specifier.exported.name(), expr);
      }
      self.hoist(decl.span, concat_string!(require_expr, ";"));
      return;
    }

    if let Some(declaration) = &decl.declaration {
      for ident in declaration_binding_identifiers(declaration) {
        self.add_getter(&ident.name, ident.name.to_string());
      }
      self.remove(Span::new(decl.span.start, declaration.span().start));
      self.visit_declaration(declaration);
      return;
    }

    for specifier in &decl.specifiers {
      let expr = match &specifier.local {
        ModuleExportName::IdentifierReference(ident) => {
          self.replacement_for(ident).cloned().unwrap_or_else(|| ident.name.to_string())
        }
        local => local.name().to_string(),
      };
      self.add_getter(&specifier.exported.name(), expr);
    }
    self.remove(decl.span);
  }

  fn finalize_export_default_decl(&mut self, decl: &ExportDefaultDeclaration<'ast>) {
    let prefix_until = |start: u32| Span::new(decl.span.start, start);
    match &decl.declaration {
      ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
        if let Some(id) = &func.id {
          self.add_getter("default", id.name.to_string());
          self.remove(prefix_until(func.span.start));
        } else {
          self.update(prefix_until(func.span.start), "exports.default = ".to_string());
        }
        self.visit_function(func, oxc::semantic::ScopeFlags::Function);
      }
      ExportDefaultDeclarationKind::ClassDeclaration(class) => {
        if let Some(id) = &class.id {
          self.add_getter("default", id.name.to_string());
          self.remove(prefix_until(class.span.start));
        } else {
          self.update(prefix_until(class.span.start), "exports.default = ".to_string());
        }
        self.visit_class(class);
      }
      kind => match kind.as_expression() {
        Some(expr) => {
          self.update(prefix_until(expr.span().start), "exports.default = ".to_string());
          self.visit_expression(expr);
        }
        None => self.unsupported("typescript default export", decl.span),
      },
    }
  }
}

/// Names the module exports explicitly, in source order.
fn explicit_export_names(program: &Program) -> Vec<String> {
  let mut names = vec![];
  for stmt in &program.body {
    match stmt.as_module_declaration() {
      Some(ModuleDeclaration::ExportNamedDeclaration(decl)) => {
        names.extend(decl.specifiers.iter().map(|specifier| specifier.exported.name().to_string()));
        if let Some(declaration) = &decl.declaration {
          names.extend(
            declaration_binding_identifiers(declaration).iter().map(|ident| ident.name.to_string()),
          );
        }
      }
      Some(ModuleDeclaration::ExportAllDeclaration(decl)) => {
        names.extend(decl.exported.as_ref().map(|exported| exported.name().to_string()));
      }
      Some(ModuleDeclaration::ExportDefaultDeclaration(_)) => names.push("default".to_string()),
      _ => {}
    }
  }
  names
}
