use oxc::ast::ast::{BindingIdentifier, BindingPattern, BindingPatternKind, Declaration};

/// Identifiers a declaration binds in its own scope, in source order. Type-only declarations
/// bind nothing at runtime.
pub fn declaration_binding_identifiers<'b, 'ast>(
  decl: &'b Declaration<'ast>,
) -> Vec<&'b BindingIdentifier<'ast>> {
  let mut out = vec![];
  match decl {
    Declaration::VariableDeclaration(var_decl) => {
      for declarator in &var_decl.declarations {
        collect_pattern(&declarator.id, &mut out);
      }
    }
    Declaration::FunctionDeclaration(func) => out.extend(func.id.as_ref()),
    Declaration::ClassDeclaration(class) => out.extend(class.id.as_ref()),
    _ => {}
  }
  out
}

fn collect_pattern<'b, 'ast>(
  pattern: &'b BindingPattern<'ast>,
  out: &mut Vec<&'b BindingIdentifier<'ast>>,
) {
  match &pattern.kind {
    BindingPatternKind::BindingIdentifier(ident) => out.push(ident),
    BindingPatternKind::ObjectPattern(object) => {
      for property in &object.properties {
        collect_pattern(&property.value, out);
      }
      if let Some(rest) = &object.rest {
        collect_pattern(&rest.argument, out);
      }
    }
    BindingPatternKind::ArrayPattern(array) => {
      for element in array.elements.iter().flatten() {
        collect_pattern(element, out);
      }
      if let Some(rest) = &array.rest {
        collect_pattern(&rest.argument, out);
      }
    }
    BindingPatternKind::AssignmentPattern(assignment) => collect_pattern(&assignment.left, out),
  }
}
