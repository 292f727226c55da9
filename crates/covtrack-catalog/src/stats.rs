//! # Breakdown Statistics
//!
//! Category/agency counts for the dashboard's summary panel.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use covtrack_core::{JurisdictionCode, Program};

/// One labeled count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledCount {
    /// Category or agency name.
    pub name: String,
    /// Number of programs.
    pub count: usize,
}

/// Aggregate catalog statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramBreakdown {
    /// Counts per category, descending.
    pub by_category: Vec<LabeledCount>,
    /// Counts per agency, descending.
    pub by_agency: Vec<LabeledCount>,
    /// Distinct jurisdictions with at least one implementation entry.
    pub total_states: usize,
}

/// Count programs by category and agency, and count distinct
/// implementation jurisdictions.
///
/// Ties in the descending sort break alphabetically so the output is
/// stable across runs.
pub fn program_breakdown(programs: &[Program]) -> ProgramBreakdown {
    let mut by_category: HashMap<&str, usize> = HashMap::new();
    let mut by_agency: HashMap<&str, usize> = HashMap::new();
    let mut states: HashSet<&JurisdictionCode> = HashSet::new();

    for program in programs {
        if let Some(category) = program.category.as_deref() {
            *by_category.entry(category).or_default() += 1;
        }
        if let Some(agency) = program.agency.as_ref() {
            *by_agency.entry(agency.as_str()).or_default() += 1;
        }
        for imp in program.implementations() {
            states.insert(&imp.state);
        }
    }

    ProgramBreakdown {
        by_category: sorted_counts(by_category),
        by_agency: sorted_counts(by_agency),
        total_states: states.len(),
    }
}

fn sorted_counts(map: HashMap<&str, usize>) -> Vec<LabeledCount> {
    let mut counts: Vec<LabeledCount> = map
        .into_iter()
        .map(|(name, count)| LabeledCount {
            name: name.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use covtrack_core::{Agency, CoverageStatus, ProgramId, StateImplementation};

    fn program(id: &str, agency: Option<&str>, category: Option<&str>) -> Program {
        Program {
            id: ProgramId::new(id),
            name: id.to_string(),
            full_name: String::new(),
            agency: agency.map(Agency::new),
            category: category.map(str::to_string),
            status: CoverageStatus::Complete,
            coverage: None,
            variable: None,
            notes: None,
            github_links: None,
            state_implementations: None,
            last_updated: None,
        }
    }

    fn implementation(state: &str) -> StateImplementation {
        StateImplementation {
            state: JurisdictionCode::new(state),
            status: CoverageStatus::Complete,
            name: None,
            full_name: None,
            notes: None,
            variable: None,
            github_links: None,
        }
    }

    #[test]
    fn test_counts_descending() {
        let breakdown = program_breakdown(&[
            program("a", Some("USDA"), Some("Taxes")),
            program("b", Some("USDA"), None),
            program("c", Some("HHS"), Some("Energy")),
        ]);
        assert_eq!(breakdown.by_agency[0].name, "USDA");
        assert_eq!(breakdown.by_agency[0].count, 2);
        assert_eq!(breakdown.by_agency[1].name, "HHS");
        assert_eq!(breakdown.by_category.len(), 2);
    }

    #[test]
    fn test_distinct_implementation_states() {
        let mut tanf = program("tanf", Some("HHS"), None);
        tanf.state_implementations = Some(vec![implementation("CA"), implementation("NY")]);
        let mut ccdf = program("ccdf", Some("HHS"), None);
        ccdf.state_implementations = Some(vec![implementation("CA"), implementation("CO")]);
        let breakdown = program_breakdown(&[tanf, ccdf]);
        assert_eq!(breakdown.total_states, 3);
    }

    #[test]
    fn test_missing_fields_skipped() {
        let breakdown = program_breakdown(&[program("a", None, None)]);
        assert!(breakdown.by_agency.is_empty());
        assert!(breakdown.by_category.is_empty());
        assert_eq!(breakdown.total_states, 0);
    }
}
