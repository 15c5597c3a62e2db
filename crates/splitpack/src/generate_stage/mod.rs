mod render_chunk;
pub mod runtime;

use rustc_hash::FxHashSet;
use splitpack_common::{
  ChunkIdx, FilenameTemplateArgs, OutputAsset, OutputChunk,
};
use splitpack_utils::{ecmascript::quote, xxhash::short_hash};

pub use self::render_chunk::render_factory;
use self::render_chunk::render_chunk;
use crate::{
  finalize_stage::FinalizeStageOutput,
  scan_stage::ScanStageOutput,
  types::{SharedOptions, bundle_output::BundleOutput},
};

const HASH_LEN: usize = 8;

pub struct GenerateStage<'a> {
  scan_output: &'a ScanStageOutput,
  options: &'a SharedOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(scan_output: &'a ScanStageOutput, options: &'a SharedOptions) -> Self {
    Self { scan_output, options }
  }

  /// One artifact per chunk. Dynamic chunks are rendered first, their file names (which may
  /// carry a content hash) go into the chunk table of the entry artifact.
  pub fn generate(&self, finalized: FinalizeStageOutput) -> BundleOutput {
    let chunk_graph = &self.scan_output.chunk_graph;
    let names = self.unique_chunk_names();

    let mut dynamic_chunks = vec![];
    let mut chunk_table = vec![];
    for chunk in chunk_graph.chunks.iter().skip(1) {
      let code = render_chunk(chunk, self.scan_output, &finalized.factories, self.options, None);
      let filename = self.render_filename(chunk.idx, &names[chunk.idx.index()], &code);
      let parent = chunk.parent.unwrap_or(ChunkIdx::ENTRY);
      chunk_table.push(format!("{}: [{}, {}]", chunk.idx.raw(), parent.raw(), quote(&filename)));
      dynamic_chunks.push(self.output_chunk(chunk.idx, filename, code));
    }

    let entry = chunk_graph.entry();
    let chunk_table = format!("{{{}}}", chunk_table.join(", "));
    let code =
      render_chunk(entry, self.scan_output, &finalized.factories, self.options, Some(&chunk_table));
    let filename = self.render_filename(entry.idx, &names[0], &code);

    let mut chunks = vec![self.output_chunk(entry.idx, filename, code)];
    chunks.extend(dynamic_chunks);

    let assets = self
      .scan_output
      .assets
      .iter()
      .map(|asset| OutputAsset { source: asset.source.clone(), filename: asset.reference.clone() })
      .collect();

    BundleOutput { chunks, assets, warnings: finalized.warnings }
  }

  fn output_chunk(&self, chunk_idx: ChunkIdx, filename: String, code: String) -> OutputChunk {
    let chunk = &self.scan_output.chunk_graph.chunks[chunk_idx];
    OutputChunk {
      chunk_idx,
      is_entry: chunk.is_entry(),
      filename,
      code,
      modules: chunk
        .modules
        .iter()
        .map(|idx| self.scan_output.module_table.modules[*idx].id.clone())
        .collect(),
    }
  }

  fn render_filename(&self, chunk_idx: ChunkIdx, name: &str, code: &str) -> String {
    let chunk = &self.scan_output.chunk_graph.chunks[chunk_idx];
    let template = chunk.filename_template(self.options);
    let hash = template.has_hash_pattern().then(|| short_hash(code.as_bytes(), HASH_LEN));
    template.render(&FilenameTemplateArgs {
      name: Some(name),
      id: Some(chunk_idx.raw()),
      hash: hash.as_deref(),
      extname: Some(".js"),
    })
  }

  /// Chunk names indexed by chunk id, later duplicates get a numeric suffix.
  fn unique_chunk_names(&self) -> Vec<String> {
    let mut used = FxHashSet::default();
    self
      .scan_output
      .chunk_graph
      .chunks
      .iter()
      .map(|chunk| {
        let mut name = chunk.name.to_string();
        let mut suffix = 2;
        while !used.insert(name.clone()) {
          name = format!("{}{suffix}", chunk.name);
          suffix += 1;
        }
        name
      })
      .collect()
  }
}
