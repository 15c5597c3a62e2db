use std::path::Path;

use arcstr::ArcStr;
use oxc::{allocator::Allocator, parser::Parser, span::SourceType};
use splitpack_error::{BuildDiagnostic, BuildResult};

use crate::ecma_ast::{EcmaAst, ProgramCell, ProgramDependent, ProgramOwner};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses `source` as an ECMAScript module. `path` only labels the diagnostic.
  pub fn parse(path: &Path, source: impl Into<ArcStr>) -> BuildResult<EcmaAst> {
    let owner = ProgramOwner { source: source.into(), allocator: Allocator::default() };
    let cell = ProgramCell::try_new(owner, |owner| {
      let ret = Parser::new(&owner.allocator, &owner.source, SourceType::mjs()).parse();
      match ret.errors.first() {
        None if !ret.panicked => Ok(ProgramDependent { program: ret.program }),
        None => Err(BuildDiagnostic::parse(path, "parser gave up on the file")),
        Some(error) => Err(BuildDiagnostic::parse(path, error.to_string())),
      }
    })?;

    Ok(EcmaAst::new(cell))
  }
}
