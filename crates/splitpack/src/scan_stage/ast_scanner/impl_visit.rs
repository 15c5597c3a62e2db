use oxc::{
  ast::ast,
  ast_visit::{Visit, walk},
};
use splitpack_common::ImportKind;

use super::AstScanner;

impl<'ast> Visit<'ast> for AstScanner {
  fn visit_statement(&mut self, stmt: &ast::Statement<'ast>) {
    if let Some(decl) = stmt.as_module_declaration() {
      self.scan_module_decl(decl);
    }
    walk::walk_statement(self, stmt);
  }

  fn visit_import_expression(&mut self, expr: &ast::ImportExpression<'ast>) {
    if let ast::Expression::StringLiteral(request) = &expr.source {
      self.add_import_record(&request.value, ImportKind::DynamicImport, vec![]);
    }
    walk::walk_import_expression(self, expr);
  }
}
