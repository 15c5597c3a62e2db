pub mod asset;
pub mod chunk_kind;
pub mod import_kind;
pub mod import_record;
pub mod module_id;
pub mod module_table;
pub mod output_asset;
pub mod output_chunk;
pub mod raw_idx;
pub mod source;
pub mod source_joiner;
