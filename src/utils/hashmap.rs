//! A hash-map that behaves deterministically when the
//! `enhanced-determinism` feature is enabled.

/// Deterministic hashmap using [`indexmap::IndexMap`].
#[cfg(feature = "enhanced-determinism")]
pub type HashMap<K, V> = indexmap::IndexMap<K, V>;

/// Hashmap using [`hashbrown::HashMap`].
#[cfg(not(feature = "enhanced-determinism"))]
pub type HashMap<K, V> = hashbrown::HashMap<K, V>;
