//! # Derivation Cache
//!
//! Single-slot memoization for the derivation pipelines. Both derivations
//! (filter and matrix) are pure functions of (catalog, UI state); renders
//! repeat far more often than their inputs change, so one remembered
//! key/value pair is all the caching the dashboard needs. There is no
//! eviction policy beyond replacement and no shared mutable state — each
//! cache is owned by one view.

/// A one-entry cache keyed on the derivation's input tuple.
///
/// `get_or_compute` returns a clone of the cached value when the key is
/// unchanged, otherwise recomputes and replaces the slot.
#[derive(Debug)]
pub struct DerivedCache<K, V> {
    slot: Option<(K, V)>,
}

// Not derived: the empty cache needs no `Default` on its parameters.
impl<K, V> Default for DerivedCache<K, V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<K: PartialEq, V: Clone> DerivedCache<K, V> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Return the cached value for `key`, computing it with `f` on a miss.
    pub fn get_or_compute(&mut self, key: K, f: impl FnOnce(&K) -> V) -> V {
        match &self.slot {
            Some((cached_key, value)) if *cached_key == key => value.clone(),
            _ => {
                let value = f(&key);
                self.slot = Some((key, value.clone()));
                value
            }
        }
    }

    /// Drop the cached entry.
    pub fn invalidate(&mut self) {
        self.slot = None;
    }

    /// Whether a value is cached for `key`.
    pub fn is_fresh(&self, key: &K) -> bool {
        matches!(&self.slot, Some((cached_key, _)) if cached_key == key)
    }
}
