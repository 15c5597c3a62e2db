#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
  /// Chunk 0, loaded first.
  Entry,
  /// Split off at an `import()` boundary.
  DynamicImport,
}
