use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use rustc_hash::FxHasher;

/// Insertion ordered set, output must not depend on hash iteration order.
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
