//! # Catalog Validation
//!
//! Invariant checks over a loaded catalog: non-empty unique program ids and
//! unique implementation states within each program. Free-text `coverage`
//! is deliberately not checked; unrecognized place names are tolerated and
//! simply never match a jurisdiction filter.

use std::collections::HashSet;

use covtrack_core::Program;

use crate::error::CatalogError;

/// Validate catalog invariants, returning the first violation found.
pub fn validate_catalog(programs: &[Program]) -> Result<(), CatalogError> {
    let mut seen_ids = HashSet::new();

    for (index, program) in programs.iter().enumerate() {
        if program.id.as_str().is_empty() {
            return Err(CatalogError::EmptyProgramId { index });
        }
        if !seen_ids.insert(&program.id) {
            return Err(CatalogError::DuplicateProgramId {
                id: program.id.clone(),
            });
        }

        let mut seen_states = HashSet::new();
        for imp in program.implementations() {
            if !seen_states.insert(&imp.state) {
                return Err(CatalogError::DuplicateImplementationState {
                    id: program.id.clone(),
                    state: imp.state.clone(),
                });
            }
        }
    }

    Ok(())
}
