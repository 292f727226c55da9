//! # Memoized Matrix Wrapper
//!
//! The matrix takes no per-render parameters; its only input that changes
//! at runtime is which country's catalog is active, so the cache is keyed
//! on the country alone.

use covtrack_core::{CountryCode, DerivedCache, Program};

use crate::builder::{build_matrix, MatrixData};
use crate::config::MatrixConfig;

/// Single-slot cache over [`build_matrix`], keyed on the active country.
#[derive(Debug, Default)]
pub struct MatrixCache {
    cache: DerivedCache<CountryCode, MatrixData>,
}

impl MatrixCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            cache: DerivedCache::new(),
        }
    }

    /// The grid for the given catalog, reusing the previous result while
    /// the country is unchanged.
    pub fn matrix(
        &mut self,
        country: CountryCode,
        catalog: &[Program],
        config: &MatrixConfig,
    ) -> MatrixData {
        self.cache
            .get_or_compute(country, |_| build_matrix(catalog, config))
    }

    /// Drop the cached result (e.g. after a catalog reload).
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covtrack_core::{Country, CoverageStatus, ProgramId};

    fn catalog() -> Vec<Program> {
        vec![Program {
            id: ProgramId::new("federal_income_tax"),
            name: "Federal Income Taxes".to_string(),
            full_name: "Federal Income Taxes".to_string(),
            agency: None,
            category: None,
            status: CoverageStatus::Complete,
            coverage: Some("US".to_string()),
            variable: None,
            notes: None,
            github_links: None,
            state_implementations: None,
            last_updated: None,
        }]
    }

    #[test]
    fn test_repeated_renders_reuse_result() {
        let catalog = catalog();
        let mut cache = MatrixCache::new();
        let config = MatrixConfig::us();
        let first = cache.matrix(CountryCode::Us, &catalog, &config);
        let second = cache.matrix(CountryCode::Us, &catalog, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_country_switch_recomputes() {
        let catalog = catalog();
        let mut cache = MatrixCache::new();
        cache.matrix(CountryCode::Us, &catalog, &MatrixConfig::us());
        let uk = MatrixConfig::for_country(Country::get(CountryCode::Uk));
        let data = cache.matrix(CountryCode::Uk, &[], &uk);
        assert!(data.rows.is_empty());
        assert_eq!(data.columns.len(), 5);
    }
}
