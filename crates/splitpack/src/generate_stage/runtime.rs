use splitpack_utils::ecmascript::quote;

const ENTRY_RUNTIME: &str = include_str!("../runtime/entry.js");
const CHUNK_RUNTIME: &str = include_str!("../runtime/chunk.js");

/// Loader installed by chunk 0. `chunk_table` is a JS object literal of
/// `id: [parent id, file]` for every other chunk.
pub fn entry_runtime(global_name: &str, chunk_table: &str) -> String {
  ENTRY_RUNTIME
    .trim_end()
    .replace("__GLOBAL_NAME__", &quote(global_name))
    .replace("__CHUNK_TABLE__", chunk_table)
}

/// Hands a chunk's module map to the loader of an already running entry.
pub fn chunk_runtime(global_name: &str) -> String {
  CHUNK_RUNTIME.trim_end().replace("__GLOBAL_NAME__", &quote(global_name))
}

/// Swaps factories in a running loader.
pub fn update_runtime(global_name: &str) -> String {
  format!("globalThis[{}].update", quote(global_name))
}
