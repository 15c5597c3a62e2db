pub use rayon::iter::{
  IndexedParallelIterator, IntoParallelIterator, IntoParallelRefIterator,
  IntoParallelRefMutIterator, ParallelIterator,
};

/// Number of workers the global pool runs per-module tasks on, bounded by available cores.
pub fn worker_count() -> usize {
  rayon::current_num_threads()
}
