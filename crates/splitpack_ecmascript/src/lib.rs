mod binding_identifiers;
mod ecma_ast;
mod ecma_compiler;

pub use crate::{
  binding_identifiers::declaration_binding_identifiers,
  ecma_ast::EcmaAst,
  ecma_compiler::EcmaCompiler,
};
