//! # Memoized Filter Wrapper
//!
//! The dashboard recomputes the filtered rows inside every render tick;
//! this wrapper skips the recomputation while the catalog (identified by
//! the active country) and the filter state are unchanged.

use covtrack_core::{CountryCode, DerivedCache, Program};

use crate::config::FilterConfig;
use crate::engine::filter_programs;
use crate::state::FilterState;

/// Single-slot cache over [`filter_programs`], keyed on
/// `(active country, filter state)`.
#[derive(Debug, Default)]
pub struct FilterCache {
    cache: DerivedCache<(CountryCode, FilterState), Vec<Program>>,
}

impl FilterCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            cache: DerivedCache::new(),
        }
    }

    /// Filtered rows for the given catalog and state, reusing the previous
    /// result when nothing changed.
    pub fn rows(
        &mut self,
        country: CountryCode,
        catalog: &[Program],
        state: &FilterState,
        config: &FilterConfig,
    ) -> Vec<Program> {
        self.cache
            .get_or_compute((country, state.clone()), |(_, state)| {
                filter_programs(catalog, state, config)
            })
    }

    /// Drop the cached result (e.g. after a catalog reload).
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}
