oxc_index::define_index_type! {
  #[derive(Default)]
  pub struct ModuleIdx = u32;
}

oxc_index::define_index_type! {
  /// Chunk ids follow discovery order, `0` is the entry chunk.
  #[derive(Default)]
  pub struct ChunkIdx = u32;
}

oxc_index::define_index_type! {
  pub struct AssetIdx = u32;
}

impl ChunkIdx {
  pub const ENTRY: Self = Self::from_raw_unchecked(0);
}
