//! # Filter Engine
//!
//! The projection from (catalog, filter state) to display rows. Four steps,
//! strictly in order:
//!
//! 1. Search short-circuit: a non-empty query searches the raw catalog and
//!    ignores every other filter.
//! 2. Level-based expansion: parents are kept (federal) or replaced by
//!    synthesized per-jurisdiction rows (state-local); skipped entirely in
//!    all-programs mode.
//! 3. Status filter.
//! 4. Level-specific secondary filters, including the jurisdiction match
//!    rules for state-local views.
//!
//! Pure and total: no side effects, no errors, missing optional fields are
//! treated as absent.

use covtrack_core::{JurisdictionCode, Program};

use crate::config::FilterConfig;
use crate::state::{AgencySelection, FilterState, JurisdictionSelection, LevelMode};

/// Project the catalog through the current filter state.
///
/// Returns freshly-built rows; the catalog is never mutated and synthesized
/// rows are never written back into it.
pub fn filter_programs(
    catalog: &[Program],
    state: &FilterState,
    config: &FilterConfig,
) -> Vec<Program> {
    // A search query overrides every other filter and never expands parents.
    if !state.search_query.is_empty() {
        let query = state.search_query.to_lowercase();
        return catalog
            .iter()
            .filter(|p| matches_search(p, &query))
            .cloned()
            .collect();
    }

    let mut rows = match state.level_mode {
        LevelMode::All => catalog.to_vec(),
        mode => expand_by_level(catalog, mode, config),
    };

    rows.retain(|p| state.status.admits(p.status));

    match state.level_mode {
        LevelMode::All => {}
        LevelMode::Federal => apply_federal_filters(&mut rows, state, config),
        LevelMode::StateLocal => apply_state_local_filters(&mut rows, state, config),
    }

    rows
}

/// Case-insensitive substring search over the display and annotation fields.
fn matches_search(program: &Program, query: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(query);
    contains(&program.name)
        || contains(&program.full_name)
        || program.notes.as_deref().is_some_and(contains)
        || program.coverage.as_deref().is_some_and(contains)
}

/// Step 2: expand the catalog for a level-focused view.
///
/// Parents become one synthesized row per implementation in state-local
/// mode, or stay as the bare parent in federal mode. Leaf programs are
/// admitted to state-local views only when state/locally owned or
/// configured as inherently statewide.
fn expand_by_level(catalog: &[Program], mode: LevelMode, config: &FilterConfig) -> Vec<Program> {
    let mut expanded = Vec::new();

    for program in catalog {
        if program.is_parent() {
            match mode {
                LevelMode::Federal => expanded.push(program.clone()),
                LevelMode::StateLocal => {
                    for imp in program.implementations() {
                        expanded.push(program.state_variant(imp));
                    }
                }
                LevelMode::All => {}
            }
        } else if mode == LevelMode::StateLocal {
            if program.has_sub_federal_agency() || config.statewide_ids.contains(&program.id) {
                expanded.push(program.clone());
            }
        } else {
            expanded.push(program.clone());
        }
    }

    expanded
}

/// Step 4, federal mode: drop sub-federal rows, then apply the agency
/// selection with the configured category fallbacks.
fn apply_federal_filters(rows: &mut Vec<Program>, state: &FilterState, config: &FilterConfig) {
    rows.retain(|p| !p.has_sub_federal_agency());

    if let AgencySelection::Agency(selected) = &state.agency {
        rows.retain(|p| {
            p.agency.as_ref().is_some_and(|a| a.as_str() == selected)
                || config
                    .fallback_category(selected)
                    .is_some_and(|cat| p.category.as_deref() == Some(cat))
        });
    }
}

/// Step 4, state-local mode: admission rules, then the per-jurisdiction
/// match when a specific jurisdiction is selected.
fn apply_state_local_filters(rows: &mut Vec<Program>, state: &FilterState, config: &FilterConfig) {
    rows.retain(|p| {
        // Synthesized per-jurisdiction rows always pass. Underscores in
        // catalog-native ids pass here too; the historical dashboards relied
        // on that to keep sub-federal programs visible in the All view.
        if p.id.as_str().contains('_') {
            return true;
        }
        match &state.jurisdiction {
            JurisdictionSelection::All => config.statewide_ids.contains(&p.id),
            JurisdictionSelection::Code(_) => {
                p.has_sub_federal_agency() || config.statewide_ids.contains(&p.id)
            }
        }
    });

    if let JurisdictionSelection::Code(code) = &state.jurisdiction {
        rows.retain(|p| jurisdiction_matches(p, code, config));
    }
}

/// Whether a row belongs to the selected jurisdiction.
///
/// Synthesized rows (no implementation list, bare 2-letter coverage) match
/// by exact code. Everything else matches by locality place-name patterns
/// or by an exact code among the comma-separated coverage parts. Coverage
/// that matches no rule excludes the row — accepted, not an error.
fn jurisdiction_matches(
    program: &Program,
    jurisdiction: &JurisdictionCode,
    config: &FilterConfig,
) -> bool {
    if program.state_implementations.is_none() {
        if let Some(coverage) = program.coverage.as_deref() {
            if coverage.len() == 2 {
                return coverage == jurisdiction.as_str();
            }
        }
    }

    let Some(coverage) = program.coverage.as_deref() else {
        return false;
    };

    if config.locality_matches(jurisdiction, coverage) {
        return true;
    }

    coverage
        .split(',')
        .map(str::trim)
        .any(|part| part == jurisdiction.as_str())
}

// ─── Tests ───────────────────────────────────────────────────────────
