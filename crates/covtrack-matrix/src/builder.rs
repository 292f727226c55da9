//! # Matrix Builder
//!
//! Maps the catalog onto the jurisdiction grid. Per program: classify its
//! level, run the propagation cascade (strategy override, then base
//! placement, then universal fan-out, then per-implementation overwrites),
//! and finally partition rows into federal/state/local buckets.
//!
//! A local program whose coverage text maps to no state column keeps an
//! empty row in the local bucket — a known gap, not an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use covtrack_core::{CoverageStatus, JurisdictionCode, Program};

use crate::config::{MatrixConfig, PropagationRule};
use crate::level::ProgramLevel;

/// One program's row in the grid.
///
/// Absent jurisdiction entries render as not-applicable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixRow {
    /// Display name.
    pub name: String,
    /// Grouping label, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Government level bucket.
    pub level: ProgramLevel,
    /// Jurisdiction column → status.
    pub jurisdictions: HashMap<JurisdictionCode, CoverageStatus>,
}

impl MatrixRow {
    /// Status in a column, `None` meaning not-applicable.
    pub fn status(&self, column: &JurisdictionCode) -> Option<CoverageStatus> {
        self.jurisdictions.get(column).copied()
    }

    /// The first column (in grid order) this row has a status for.
    /// Drives the state/local bucket grouping and sorting.
    pub fn primary_jurisdiction<'a>(
        &self,
        columns: &'a [JurisdictionCode],
    ) -> Option<&'a JurisdictionCode> {
        columns.iter().find(|c| self.jurisdictions.contains_key(c))
    }
}

/// The built grid: the column universe, all rows in display order, and the
/// per-level partitions (state/local partitions sorted by jurisdiction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixData {
    /// Column universe in display order (synthetic federal column first).
    pub columns: Vec<JurisdictionCode>,
    /// All rows, in display order.
    pub rows: Vec<MatrixRow>,
    /// Federal-level rows, display order.
    pub federal_rows: Vec<MatrixRow>,
    /// State-level rows, sorted by primary jurisdiction.
    pub state_rows: Vec<MatrixRow>,
    /// Local-level rows, sorted by primary jurisdiction.
    pub local_rows: Vec<MatrixRow>,
}

/// Build the jurisdiction × program status grid.
///
/// Pure function of the catalog and configuration; returns fresh data on
/// every invocation.
pub fn build_matrix(catalog: &[Program], config: &MatrixConfig) -> MatrixData {
    let mut eligible: Vec<&Program> = catalog
        .iter()
        .filter(|p| {
            config.display_rank(&p.id).is_some() || p.is_parent() || p.has_sub_federal_agency()
        })
        .collect();

    // Allowlisted programs first, in allowlist order; the rest keep catalog
    // order (stable sort).
    eligible.sort_by(|a, b| {
        match (config.display_rank(&a.id), config.display_rank(&b.id)) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });

    let rows: Vec<MatrixRow> = eligible
        .iter()
        .map(|program| build_row(program, config))
        .collect();

    let federal_rows: Vec<MatrixRow> = rows
        .iter()
        .filter(|r| r.level == ProgramLevel::Federal)
        .cloned()
        .collect();
    let mut state_rows: Vec<MatrixRow> = rows
        .iter()
        .filter(|r| r.level == ProgramLevel::State)
        .cloned()
        .collect();
    let mut local_rows: Vec<MatrixRow> = rows
        .iter()
        .filter(|r| r.level == ProgramLevel::Local)
        .cloned()
        .collect();

    let sort_key = |row: &MatrixRow| {
        row.primary_jurisdiction(&config.columns)
            .map(|c| c.as_str().to_string())
            .unwrap_or_default()
    };
    state_rows.sort_by_key(sort_key);
    local_rows.sort_by_key(sort_key);

    MatrixData {
        columns: config.columns.clone(),
        rows,
        federal_rows,
        state_rows,
        local_rows,
    }
}

/// Classify a program's government level.
///
/// `Local` agency wins; `State` agency or a bare non-sentinel 2-letter
/// coverage is state-level; everything else (including statewide programs
/// that exist in every jurisdiction) stays federal.
fn classify_level(program: &Program, config: &MatrixConfig) -> ProgramLevel {
    if program.agency.as_ref().is_some_and(|a| a.is_local()) {
        return ProgramLevel::Local;
    }
    let bare_state_coverage = program
        .coverage
        .as_deref()
        .is_some_and(|c| c.len() == 2 && c != config.coverage_sentinel);
    if program.agency.as_ref().is_some_and(|a| a.is_state()) || bare_state_coverage {
        return ProgramLevel::State;
    }
    ProgramLevel::Federal
}

/// Run the propagation cascade for one program.
fn build_row(program: &Program, config: &MatrixConfig) -> MatrixRow {
    let level = classify_level(program, config);
    let mut jurisdictions: HashMap<JurisdictionCode, CoverageStatus> = HashMap::new();

    match config.rule_for(&program.id) {
        PropagationRule::FederalOnly => {
            jurisdictions.insert(JurisdictionCode::federal(), program.status);
        }
        PropagationRule::StatewideOnly => {
            for state in config.state_columns() {
                jurisdictions.insert(state.clone(), program.status);
            }
        }
        PropagationRule::ImplementationsOnly => {
            // Federal column intentionally left unset.
            for imp in program.implementations() {
                jurisdictions.insert(imp.state.clone(), imp.status);
            }
        }
        PropagationRule::FederalWithStateDefault => {
            jurisdictions.insert(JurisdictionCode::federal(), program.status);
            for state in config.state_columns() {
                jurisdictions.insert(state.clone(), CoverageStatus::NotStarted);
            }
            for imp in program.implementations() {
                jurisdictions.insert(imp.state.clone(), imp.status);
            }
        }
        PropagationRule::Standard => {
            // Base placement by level. A state-agency parent skips this:
            // its columns come from the implementation list alone.
            let state_agency_parent = program.state_implementations.is_some()
                && program.agency.as_ref().is_some_and(|a| a.is_state());
            if !state_agency_parent {
                match level {
                    ProgramLevel::Federal => {
                        jurisdictions.insert(JurisdictionCode::federal(), program.status);
                    }
                    ProgramLevel::State => {
                        if let Some(coverage) = program.coverage.as_deref() {
                            if coverage.len() == 2 {
                                jurisdictions
                                    .insert(JurisdictionCode::new(coverage), program.status);
                            }
                        }
                    }
                    ProgramLevel::Local => {
                        if let Some(coverage) = program.coverage.as_deref() {
                            if let Some(state) = config.locality_state(coverage) {
                                jurisdictions.insert(state.clone(), program.status);
                            }
                            // Unmapped locality: row stays empty.
                        }
                    }
                }
            }

            if config.universal_ids.contains(&program.id) {
                for state in config.state_columns() {
                    jurisdictions.insert(state.clone(), program.status);
                }
            }

            // Implementation statuses overwrite whatever was placed above.
            for imp in program.implementations() {
                jurisdictions.insert(imp.state.clone(), imp.status);
            }
        }
    }

    MatrixRow {
        name: program.name.clone(),
        category: program.category.clone(),
        level,
        jurisdictions,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use covtrack_core::{Agency, ProgramId, StateImplementation};

    fn program(id: &str, name: &str, status: CoverageStatus) -> Program {
        Program {
            id: ProgramId::new(id),
            name: name.to_string(),
            full_name: name.to_string(),
            agency: None,
            category: None,
            status,
            coverage: None,
            variable: None,
            notes: None,
            github_links: None,
            state_implementations: None,
            last_updated: None,
        }
    }

    fn implementation(state: &str, status: CoverageStatus) -> StateImplementation {
        StateImplementation {
            state: JurisdictionCode::new(state),
            status,
            name: None,
            full_name: None,
            notes: None,
            variable: None,
            github_links: None,
        }
    }

    fn fed(column: &str) -> JurisdictionCode {
        JurisdictionCode::new(column)
    }

    fn row_named<'a>(data: &'a MatrixData, name: &str) -> &'a MatrixRow {
        data.rows
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no row named {name}"))
    }

    #[test]
    fn test_federal_income_tax_isolated_to_federal_column() {
        let mut p = program("federal_income_tax", "Federal Income Taxes", CoverageStatus::Complete);
        p.coverage = Some("US".to_string());
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "Federal Income Taxes");
        assert_eq!(row.status(&JurisdictionCode::federal()), Some(CoverageStatus::Complete));
        assert_eq!(row.jurisdictions.len(), 1);
        assert_eq!(row.status(&fed("CA")), None);
    }

    #[test]
    fn test_state_income_tax_fills_states_not_federal() {
        let mut p = program("state_income_tax", "State Income Taxes", CoverageStatus::Complete);
        p.coverage = Some("US".to_string());
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "State Income Taxes");
        assert_eq!(row.status(&JurisdictionCode::federal()), None);
        assert_eq!(row.jurisdictions.len(), 51);
        assert_eq!(row.status(&fed("WY")), Some(CoverageStatus::Complete));
    }

    #[test]
    fn test_ssi_state_supplement_implementations_only() {
        let mut p = program("ssi_state_supplement", "SSI State Supplement", CoverageStatus::Partial);
        p.state_implementations = Some(vec![
            implementation("CA", CoverageStatus::Complete),
            implementation("NY", CoverageStatus::InProgress),
        ]);
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "SSI State Supplement");
        assert_eq!(row.status(&JurisdictionCode::federal()), None);
        assert_eq!(row.status(&fed("CA")), Some(CoverageStatus::Complete));
        assert_eq!(row.status(&fed("NY")), Some(CoverageStatus::InProgress));
        assert_eq!(row.jurisdictions.len(), 2);
    }

    #[test]
    fn test_block_grant_defaults_then_overrides() {
        let mut p = program("ccdf", "CCDF", CoverageStatus::Partial);
        p.state_implementations = Some(vec![implementation("CO", CoverageStatus::Complete)]);
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "CCDF");
        assert_eq!(row.status(&JurisdictionCode::federal()), Some(CoverageStatus::Partial));
        assert_eq!(row.status(&fed("CO")), Some(CoverageStatus::Complete));
        // Every other state defaults to not-started.
        assert_eq!(row.status(&fed("WY")), Some(CoverageStatus::NotStarted));
        assert_eq!(row.jurisdictions.len(), 52);
    }

    #[test]
    fn test_universal_propagation_with_implementation_override() {
        let mut snap = program("snap", "SNAP", CoverageStatus::Complete);
        snap.agency = Some(Agency::new("USDA"));
        snap.coverage = Some("US".to_string());
        snap.state_implementations = Some(vec![implementation("AK", CoverageStatus::Partial)]);
        let data = build_matrix(&[snap], &MatrixConfig::us());
        let row = row_named(&data, "SNAP");
        assert_eq!(row.status(&JurisdictionCode::federal()), Some(CoverageStatus::Complete));
        assert_eq!(row.status(&fed("WY")), Some(CoverageStatus::Complete));
        // The implementation entry overwrites the universal fan-out.
        assert_eq!(row.status(&fed("AK")), Some(CoverageStatus::Partial));
    }

    #[test]
    fn test_state_program_single_column() {
        let mut p = program("ca_care", "California CARE", CoverageStatus::Complete);
        p.agency = Some(Agency::new("State"));
        p.coverage = Some("CA".to_string());
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "California CARE");
        assert_eq!(row.level, ProgramLevel::State);
        assert_eq!(row.status(&fed("CA")), Some(CoverageStatus::Complete));
        assert_eq!(row.jurisdictions.len(), 1);
    }

    #[test]
    fn test_bare_coverage_classifies_state_without_state_agency() {
        let mut p = program("ny_drive_clean", "NY Drive Clean", CoverageStatus::InProgress);
        p.coverage = Some("NY".to_string());
        p.state_implementations = Some(vec![implementation("NY", CoverageStatus::InProgress)]);
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "NY Drive Clean");
        assert_eq!(row.level, ProgramLevel::State);
        assert_eq!(row.status(&fed("NY")), Some(CoverageStatus::InProgress));
    }

    #[test]
    fn test_sentinel_coverage_is_not_a_state() {
        let mut p = program("summer_ebt", "Summer EBT", CoverageStatus::InProgress);
        p.coverage = Some("US".to_string());
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "Summer EBT");
        assert_eq!(row.level, ProgramLevel::Federal);
        assert_eq!(row.status(&JurisdictionCode::federal()), Some(CoverageStatus::InProgress));
    }

    #[test]
    fn test_local_program_maps_to_state_column() {
        let mut p = program("la_general_relief", "LA General Relief", CoverageStatus::Complete);
        p.agency = Some(Agency::new("Local"));
        p.coverage = Some("Los Angeles County".to_string());
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "LA General Relief");
        assert_eq!(row.level, ProgramLevel::Local);
        assert_eq!(row.status(&fed("CA")), Some(CoverageStatus::Complete));
        assert_eq!(row.jurisdictions.len(), 1);
    }

    #[test]
    fn test_unmapped_local_coverage_leaves_empty_row() {
        let mut p = program("mystery_grant", "Mystery Grant", CoverageStatus::Complete);
        p.agency = Some(Agency::new("Local"));
        p.coverage = Some("Somewhere Else".to_string());
        let data = build_matrix(&[p], &MatrixConfig::us());
        let row = row_named(&data, "Mystery Grant");
        assert_eq!(row.level, ProgramLevel::Local);
        assert!(row.jurisdictions.is_empty());
        // Still bucketed as local.
        assert_eq!(data.local_rows.len(), 1);
    }

    #[test]
    fn test_eligibility_excludes_plain_federal_leaves() {
        let mut eitc = program("eitc", "EITC", CoverageStatus::Complete);
        eitc.coverage = Some("US".to_string());
        let unlisted = program("obscure_pilot", "Obscure Pilot", CoverageStatus::NotStarted);
        let data = build_matrix(&[eitc, unlisted], &MatrixConfig::us());
        // Universal-set membership is not an eligibility hook: `eitc` has no
        // allowlist rank, no implementations, and no sub-federal agency, so
        // it is excluded like the unlisted pilot.
        assert!(data.rows.iter().all(|r| r.name != "Obscure Pilot"));
        assert!(data.rows.iter().all(|r| r.name != "EITC"));
    }

    #[test]
    fn test_display_order_and_catalog_order() {
        let mut snap = program("snap", "SNAP", CoverageStatus::Complete);
        snap.coverage = Some("US".to_string());
        let mut fit = program("federal_income_tax", "Federal Income Taxes", CoverageStatus::Complete);
        fit.coverage = Some("US".to_string());
        let mut local_b = program("b_local", "B Local", CoverageStatus::Complete);
        local_b.agency = Some(Agency::new("Local"));
        let mut local_a = program("a_local", "A Local", CoverageStatus::Complete);
        local_a.agency = Some(Agency::new("Local"));

        // Catalog order: snap after the locals; allowlisted rows must still
        // lead, locals follow in catalog order.
        let data = build_matrix(&[local_b, local_a, snap, fit], &MatrixConfig::us());
        let names: Vec<&str> = data.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Federal Income Taxes", "SNAP", "B Local", "A Local"]);
    }

    #[test]
    fn test_buckets_sorted_by_primary_jurisdiction() {
        let mut tx = program("tx_aid", "TX Aid", CoverageStatus::Complete);
        tx.agency = Some(Agency::new("State"));
        tx.coverage = Some("TX".to_string());
        let mut ca = program("ca_aid", "CA Aid", CoverageStatus::Complete);
        ca.agency = Some(Agency::new("State"));
        ca.coverage = Some("CA".to_string());
        let data = build_matrix(&[tx, ca], &MatrixConfig::us());
        let names: Vec<&str> = data.state_rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["CA Aid", "TX Aid"]);
        // Display order is unchanged in `rows`.
        let all: Vec<&str> = data.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(all, ["TX Aid", "CA Aid"]);
    }

    #[test]
    fn test_row_serde_wire_form() {
        let mut p = program("tanf", "TANF", CoverageStatus::InProgress);
        p.category = Some("Benefits".to_string());
        p.state_implementations = Some(vec![implementation("CA", CoverageStatus::Complete)]);
        let data = build_matrix(&[p], &MatrixConfig::us());
        let json = serde_json::to_value(row_named(&data, "TANF")).unwrap();

        // Jurisdiction map keys are bare code strings, statuses camelCase,
        // levels lowercase.
        assert_eq!(json["level"], "federal");
        assert_eq!(json["category"], "Benefits");
        assert_eq!(json["jurisdictions"]["Federal"], "inProgress");
        assert_eq!(json["jurisdictions"]["CA"], "complete");

        let back: MatrixRow = serde_json::from_value(json).unwrap();
        assert_eq!(&back, row_named(&data, "TANF"));
    }

    #[test]
    fn test_idempotent() {
        let mut snap = program("snap", "SNAP", CoverageStatus::Complete);
        snap.coverage = Some("US".to_string());
        let config = MatrixConfig::us();
        assert_eq!(build_matrix(&[snap.clone()], &config), build_matrix(&[snap], &config));
    }
}
