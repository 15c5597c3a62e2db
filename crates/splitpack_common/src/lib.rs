mod bundler_options;
mod chunk;
mod module;
mod types;

pub use bundler_options::{
  BundlerOptions, filename_template::{FilenameTemplate, FilenameTemplateArgs}, module_type::ModuleType,
  normalized_bundler_options::NormalizedBundlerOptions,
};

pub use crate::{
  chunk::{Chunk, chunk_graph::ChunkGraph},
  module::{dependency_edge::DependencyEdge, module_record::ModuleRecord},
  types::{
    asset::Asset,
    chunk_kind::ChunkKind,
    import_kind::ImportKind,
    import_record::{ImportRecord, ImportTarget, RawImportRecord, ResolvedImportRecord},
    module_id::ModuleId,
    module_table::{IndexModules, ModuleTable},
    output_asset::OutputAsset,
    output_chunk::OutputChunk,
    raw_idx::{AssetIdx, ChunkIdx, ModuleIdx},
    source::Source,
    source_joiner::SourceJoiner,
  },
};
