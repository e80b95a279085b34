use std::hash::BuildHasherDefault;

use rustc_hash::FxHasher;

/// Insertion-ordered map with the fast hasher. Order preservation matters
/// wherever the map ends up rendered into the output artifact.
pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<FxHasher>>;
