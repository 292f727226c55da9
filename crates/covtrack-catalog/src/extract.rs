//! # Jurisdiction Extraction
//!
//! Derives the set of jurisdictions a catalog actually touches from the
//! free-text `coverage` fields. Feeds the dashboard's state picker, so it
//! only reports codes the country recognizes.

use std::collections::BTreeSet;

use covtrack_core::{Country, JurisdictionCode, Program};

/// Extract the jurisdiction codes named by a catalog's coverage text.
///
/// Coverage equal to the country sentinel is skipped. Each remaining
/// coverage is split on commas; parts that are known jurisdiction codes are
/// collected, and the Los Angeles / Riverside place names map to CA. The
/// result is sorted and de-duplicated.
pub fn extract_states(programs: &[Program], country: &Country) -> Vec<JurisdictionCode> {
    let mut states: BTreeSet<JurisdictionCode> = BTreeSet::new();
    let california = JurisdictionCode::new("CA");

    for program in programs {
        let Some(coverage) = program.coverage.as_deref() else {
            continue;
        };
        if coverage == country.coverage_sentinel {
            continue;
        }

        for part in coverage.split(',').map(str::trim) {
            let code = JurisdictionCode::new(part);
            if country.contains(&code) {
                states.insert(code);
            } else if (part.contains("Los Angeles") || part.contains("Riverside"))
                && country.contains(&california)
            {
                states.insert(california.clone());
            }
        }
    }

    states.into_iter().collect()
}
