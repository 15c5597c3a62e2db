use oxc_index::IndexVec;
use splitpack_common::{Chunk, ModuleIdx, SourceJoiner};
use splitpack_utils::{concat_string, ecmascript::quote};

use super::runtime::{chunk_runtime, entry_runtime};
use crate::{scan_stage::ScanStageOutput, types::SharedOptions};

/// `"<path>": function (exports, require) { .. }`
pub fn render_factory(path: &str, body: &str) -> String {
  concat_string!(
    quote(path),
    ": function (exports, require) {\n\"use strict\";\n",
    body.trim_end(),
    "\n}"
  )
}

/// The artifact of one chunk: the runtime, invoked on the chunk's module map. `chunk_table` is
/// only given for the entry chunk.
pub fn render_chunk(
  chunk: &Chunk,
  scan_output: &ScanStageOutput,
  factories: &IndexVec<ModuleIdx, String>,
  options: &SharedOptions,
  chunk_table: Option<&str>,
) -> String {
  let modules = &scan_output.module_table.modules;
  let module_map = chunk
    .modules
    .iter()
    .map(|idx| render_factory(&modules[*idx].id, &factories[*idx]))
    .collect::<Vec<_>>()
    .join(",\n");

  let mut joiner = SourceJoiner::default();
  match chunk_table {
    Some(chunk_table) => {
      let entry = &modules[chunk.root].id;
      joiner.append_source(concat_string!(entry_runtime(&options.global_name, chunk_table), "({"));
      joiner.append_source(module_map);
      joiner.append_source(concat_string!(
        "}, ",
        quote(entry),
        ", ",
        chunk.idx.raw().to_string(),
        ", typeof require === \"function\" ? require : undefined, ",
        "typeof __dirname === \"string\" ? __dirname : undefined);\n"
      ));
    }
    None => {
      joiner.append_source(concat_string!(chunk_runtime(&options.global_name), "({"));
      joiner.append_source(module_map);
      joiner.append_source(concat_string!("}, ", chunk.idx.raw().to_string(), ");\n"));
    }
  }
  joiner.join()
}
