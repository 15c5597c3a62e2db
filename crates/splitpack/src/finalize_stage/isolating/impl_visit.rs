use oxc::{
  ast::ast,
  ast_visit::{Visit, walk},
};
use splitpack_common::ImportTarget;
use splitpack_utils::{concat_string, ecmascript::quote};

use super::IsolatingModuleFinalizer;

impl<'ast> Visit<'ast> for IsolatingModuleFinalizer<'_, 'ast> {
  fn visit_statement(&mut self, stmt: &ast::Statement<'ast>) {
    match stmt.as_module_declaration() {
      Some(decl) => self.finalize_module_decl(decl),
      None => walk::walk_statement(self, stmt),
    }
  }

  fn visit_identifier_reference(&mut self, ident: &ast::IdentifierReference<'ast>) {
    if let Some(replacement) = self.replacement_for(ident).cloned() {
      self.update(ident.span, replacement);
    }
  }

  fn visit_object_property(&mut self, prop: &ast::ObjectProperty<'ast>) {
    // `{ a }` has to become `{ a: require("..").a }`, the key keeps the local name.
    if prop.shorthand {
      if let ast::Expression::Identifier(ident) = &prop.value {
        if let Some(replacement) = self.replacement_for(ident) {
          let content = concat_string!(ident.name, ": ", replacement);
          self.update(prop.span, content);
          return;
        }
      }
    }
    walk::walk_object_property(self, prop);
  }

  fn visit_import_expression(&mut self, expr: &ast::ImportExpression<'ast>) {
    let ast::Expression::StringLiteral(request) = &expr.source else {
      self.unsupported("import() with a computed specifier", expr.span);
      walk::walk_import_expression(self, expr);
      return;
    };
    let Ok(target) = self.target_of(request) else {
      return;
    };

    let content = match target {
      ImportTarget::Module(idx) => {
        let chunk = self.ctx.chunk_graph.owner_of(idx).map_or(0, |chunk| chunk.raw());
        concat_string!(
          "require.load(",
          chunk.to_string(),
          ").then(() => require(",
          quote(&self.ctx.modules[idx].id),
          "))"
        )
      }
      ImportTarget::Asset(idx) => {
        concat_string!("Promise.resolve(require.asset(", quote(&self.ctx.assets[idx].reference), "))")
      }
    };
    self.update(expr.span, content);
  }

  fn visit_meta_property(&mut self, meta: &ast::MetaProperty<'ast>) {
    if meta.meta.name == "import" {
      self.unsupported("import.meta", meta.span);
    }
  }
}
