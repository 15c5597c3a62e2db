mod finalizer_context;
mod isolating;

use oxc::semantic::SemanticBuilder;
use oxc_index::IndexVec;
use splitpack_common::ModuleIdx;
use splitpack_ecmascript::EcmaAst;
use splitpack_error::{BuildDiagnostic, BuildResult};
use splitpack_utils::rayon::{IntoParallelRefIterator, ParallelIterator, worker_count};

pub use self::finalizer_context::FinalizerContext;
use self::isolating::IsolatingModuleFinalizer;
use crate::scan_stage::ScanStageOutput;

#[derive(Debug)]
pub struct FinalizeStageOutput {
  /// Factory body per module.
  pub factories: IndexVec<ModuleIdx, String>,
  pub warnings: Vec<BuildDiagnostic>,
}

pub struct FinalizeStage<'a> {
  scan_output: &'a ScanStageOutput,
}

impl<'a> FinalizeStage<'a> {
  pub fn new(scan_output: &'a ScanStageOutput) -> Self {
    Self { scan_output }
  }

  /// Transforms every module on the rayon pool. The first fatal diagnostic stops the remaining
  /// tasks and is returned alone.
  pub fn finalize(&self) -> BuildResult<FinalizeStageOutput> {
    let ScanStageOutput { module_table, index_ecma_ast, chunk_graph, assets } = self.scan_output;
    tracing::debug!(modules = module_table.len(), workers = worker_count(), "transforming modules");

    let results = module_table
      .modules
      .par_iter()
      .map(|module| {
        let ctx = FinalizerContext::new(module, &module_table.modules, chunk_graph, assets);
        finalize_module(&ctx, &index_ecma_ast[module.idx])
      })
      .collect::<Result<Vec<_>, BuildDiagnostic>>()?;

    let mut warnings = vec![];
    let factories = results
      .into_iter()
      .map(|(code, module_warnings)| {
        warnings.extend(module_warnings);
        code
      })
      .collect();

    Ok(FinalizeStageOutput { factories, warnings })
  }
}

/// Rewrites one parsed module into a factory body.
pub fn finalize_module(
  ctx: &FinalizerContext,
  ast: &EcmaAst,
) -> Result<(String, Vec<BuildDiagnostic>), BuildDiagnostic> {
  let _span = tracing::debug_span!("transform", path = ctx.module.stable_id.as_str()).entered();
  let program = ast.program();
  let scoping = SemanticBuilder::new().build(program).semantic.into_scoping();
  IsolatingModuleFinalizer::new(ctx, &scoping, ast.source()).finalize(program)
}
