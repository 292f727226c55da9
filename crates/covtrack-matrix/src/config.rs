//! # Matrix Configuration Tables
//!
//! The product-data decisions behind the grid: which programs appear and in
//! what order, which ids get a non-standard propagation strategy, which are
//! universal benefits, and how free-text local coverage maps onto a state
//! column. These sets shift between catalog revisions, so they are supplied
//! as configuration; [`MatrixConfig::us`] carries the defaults observed in
//! the US catalog.

use std::collections::{HashMap, HashSet};

use covtrack_core::{Country, CountryCode, JurisdictionCode, ProgramId};

/// How a program's status populates its jurisdiction columns.
///
/// Applied before the universal fan-out and the per-implementation
/// overwrites; first match wins for the base placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropagationRule {
    /// Only the synthetic federal column (e.g. federal income tax).
    FederalOnly,
    /// Every state column, never the federal one (e.g. state income tax).
    StatewideOnly,
    /// Nothing but the implementation list; the federal column stays
    /// not-applicable (e.g. SSI state supplements).
    ImplementationsOnly,
    /// Federal column set, every state defaulted to not-started, then
    /// implementations overwrite (block grants: CCDF, LIHEAP).
    FederalWithStateDefault,
    /// Level-based placement: federal column, single state column, or a
    /// locality-mapped state column.
    Standard,
}

/// Substring patterns mapping local free-text coverage to a state column.
#[derive(Debug, Clone)]
pub struct LocalityMapping {
    /// Substrings tried against the coverage text.
    pub patterns: Vec<String>,
    /// The state column populated on a match.
    pub state: JurisdictionCode,
}

impl LocalityMapping {
    fn new(patterns: &[&str], state: &str) -> Self {
        Self {
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            state: JurisdictionCode::new(state),
        }
    }

    /// Whether the coverage text names this locality.
    pub fn matches(&self, coverage: &str) -> bool {
        self.patterns.iter().any(|p| coverage.contains(p.as_str()))
    }
}

/// Configuration for one country's matrix.
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Column universe: the synthetic federal column followed by every
    /// jurisdiction, in display order.
    pub columns: Vec<JurisdictionCode>,
    /// Display-order allowlist. Programs listed here sort first, in this
    /// order; unlisted-but-eligible programs follow in catalog order.
    pub display_order: Vec<ProgramId>,
    /// Universal benefits: fan the program's own status out to every state
    /// column (implementations still overwrite).
    pub universal_ids: HashSet<ProgramId>,
    /// Per-id strategy overrides. Ids absent here use
    /// [`PropagationRule::Standard`].
    pub propagation_overrides: HashMap<ProgramId, PropagationRule>,
    /// Ordered locality → state lookup for local programs, first match wins.
    pub locality_map: Vec<LocalityMapping>,
    /// Coverage sentinel meaning "the whole country"; a bare 2-letter
    /// coverage equal to it is national, not a state code.
    pub coverage_sentinel: String,
}

impl MatrixConfig {
    /// The configuration observed for the US catalog.
    pub fn us() -> Self {
        let country = Country::get(CountryCode::Us);

        let display_order = [
            "federal_income_tax",
            "state_income_tax",
            "payroll_taxes",
            "ira_tax_credits",
            "snap",
            "summer_ebt",
            "wic",
            "school_meals",
            "csfp",
            "tanf",
            "ccdf",
            "liheap",
            "acp",
            "ssi",
            "social_security",
            "ssi_state_supplement",
            "lifeline",
            "medicare",
            "medicaid",
            "chip",
            "aca_subsidies",
            "section_8",
            "pell_grant",
            "head_start",
            "clean_vehicle_credits",
        ]
        .iter()
        .map(|id| ProgramId::new(*id))
        .collect();

        let universal_ids = [
            "snap",
            "tanf",
            "medicaid",
            "wic",
            "state_income_tax",
            "medicare",
            "eitc",
            "ctc",
            "aca_subsidies",
            "payroll_taxes",
            "school_meals",
            "csfp",
            "chip",
        ]
        .iter()
        .map(|id| ProgramId::new(*id))
        .collect();

        let propagation_overrides = HashMap::from([
            (ProgramId::new("federal_income_tax"), PropagationRule::FederalOnly),
            (ProgramId::new("state_income_tax"), PropagationRule::StatewideOnly),
            (
                ProgramId::new("ssi_state_supplement"),
                PropagationRule::ImplementationsOnly,
            ),
            (ProgramId::new("ccdf"), PropagationRule::FederalWithStateDefault),
            (ProgramId::new("liheap"), PropagationRule::FederalWithStateDefault),
        ]);

        let locality_map = vec![
            LocalityMapping::new(
                &[
                    "California",
                    "Los Angeles",
                    "Riverside",
                    "Alameda",
                    "San Francisco",
                ],
                "CA",
            ),
            LocalityMapping::new(&["New York"], "NY"),
            LocalityMapping::new(&["Texas", "Dallas", "Harris"], "TX"),
            LocalityMapping::new(&["Illinois", "Chicago"], "IL"),
            LocalityMapping::new(&["Maryland", "Montgomery County"], "MD"),
            LocalityMapping::new(&["DC"], "DC"),
        ];

        Self {
            columns: Self::columns_for(country),
            display_order,
            universal_ids,
            propagation_overrides,
            locality_map,
            coverage_sentinel: country.coverage_sentinel.clone(),
        }
    }

    /// A minimal configuration for another country: its column universe and
    /// sentinel, no allowlist or overrides.
    pub fn for_country(country: &Country) -> Self {
        Self {
            columns: Self::columns_for(country),
            display_order: Vec::new(),
            universal_ids: HashSet::new(),
            propagation_overrides: HashMap::new(),
            locality_map: Vec::new(),
            coverage_sentinel: country.coverage_sentinel.clone(),
        }
    }

    fn columns_for(country: &Country) -> Vec<JurisdictionCode> {
        let mut columns = Vec::with_capacity(country.jurisdictions.len() + 1);
        columns.push(JurisdictionCode::federal());
        columns.extend(country.jurisdiction_codes());
        columns
    }

    /// State columns (the universe minus the synthetic federal column).
    pub fn state_columns(&self) -> impl Iterator<Item = &JurisdictionCode> {
        self.columns.iter().filter(|c| !c.is_federal())
    }

    /// The propagation strategy for a program id.
    pub fn rule_for(&self, id: &ProgramId) -> PropagationRule {
        self.propagation_overrides
            .get(id)
            .copied()
            .unwrap_or(PropagationRule::Standard)
    }

    /// The state column a local coverage text maps to, if any.
    pub fn locality_state(&self, coverage: &str) -> Option<&JurisdictionCode> {
        self.locality_map
            .iter()
            .find(|m| m.matches(coverage))
            .map(|m| &m.state)
    }

    /// Position of an id in the display-order allowlist.
    pub fn display_rank(&self, id: &ProgramId) -> Option<usize> {
        self.display_order.iter().position(|ordered| ordered == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_columns_are_federal_plus_states() {
        let config = MatrixConfig::us();
        assert_eq!(config.columns.len(), 52); // Federal + 50 states + DC
        assert!(config.columns[0].is_federal());
        assert_eq!(config.state_columns().count(), 51);
    }

    #[test]
    fn test_rule_lookup_defaults_to_standard() {
        let config = MatrixConfig::us();
        assert_eq!(
            config.rule_for(&ProgramId::new("federal_income_tax")),
            PropagationRule::FederalOnly
        );
        assert_eq!(config.rule_for(&ProgramId::new("snap")), PropagationRule::Standard);
    }

    #[test]
    fn test_locality_first_match_wins() {
        let config = MatrixConfig::us();
        assert_eq!(
            config.locality_state("Los Angeles County").map(|s| s.as_str()),
            Some("CA")
        );
        assert_eq!(config.locality_state("Chicago").map(|s| s.as_str()), Some("IL"));
        assert_eq!(
            config.locality_state("Montgomery County, MD").map(|s| s.as_str()),
            // "Montgomery County, MD" is matched by the MD mapping; nothing
            // earlier in the table claims it.
            Some("MD")
        );
        assert_eq!(config.locality_state("Somewhere Unmapped"), None);
    }

    #[test]
    fn test_for_country_shape() {
        let config = MatrixConfig::for_country(Country::get(CountryCode::Uk));
        assert_eq!(config.columns.len(), 5); // National column + 4 countries
        assert!(config.display_order.is_empty());
        assert_eq!(config.coverage_sentinel, "UK");
    }
}
