use std::fmt::Debug;

use arcstr::ArcStr;
use oxc::{allocator::Allocator, ast::ast::Program};
use self_cell::self_cell;

pub struct ProgramOwner {
  pub source: ArcStr,
  pub allocator: Allocator,
}

pub struct ProgramDependent<'cell> {
  pub program: Program<'cell>,
}

self_cell!(
  /// Keeps a `Program<'ast>` together with the source text and arena it borrows from, so a parsed
  /// module can live in the module table like any owned value.
  pub struct ProgramCell {
    owner: ProgramOwner,

    #[covariant]
    dependent: ProgramDependent,
  }
);

/// A parsed module. Read-only once built, so one module's tree can be shared with the worker
/// that transforms it.
pub struct EcmaAst {
  cell: ProgramCell,
}

impl EcmaAst {
  pub(crate) fn new(cell: ProgramCell) -> Self {
    Self { cell }
  }

  pub fn source(&self) -> &ArcStr {
    &self.cell.borrow_owner().source
  }

  pub fn program(&self) -> &Program {
    &self.cell.borrow_dependent().program
  }
}

impl Debug for EcmaAst {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EcmaAst").field("source", &self.source()).finish_non_exhaustive()
  }
}

// Apart from the id cells the semantic pass fills in, the tree is never written after parsing.
// Each module is analysed by exactly one task at a time.
unsafe impl Send for EcmaAst {}
unsafe impl Sync for EcmaAst {}
