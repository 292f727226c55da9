//! # Filter Configuration Tables
//!
//! The product-data special cases the engine consults: county/city place
//! names per jurisdiction, agency category fallbacks, and the program ids
//! that are always shown in state-local views. These grow per catalog
//! revision, so they are configuration handed to the engine rather than
//! conditionals inlined in it. [`FilterConfig::us`] carries the defaults
//! observed in the US catalog.

use std::collections::{HashMap, HashSet};

use covtrack_core::{Agency, JurisdictionCode, ProgramId};

/// How a coverage string is matched against a locality pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoveragePattern {
    /// Coverage contains this substring.
    Contains(String),
    /// Coverage equals this string exactly.
    Exact(String),
}

impl CoveragePattern {
    /// Whether `coverage` satisfies this pattern.
    pub fn matches(&self, coverage: &str) -> bool {
        match self {
            Self::Contains(needle) => coverage.contains(needle.as_str()),
            Self::Exact(text) => coverage == text,
        }
    }
}

/// Place-name patterns that map a program's coverage text to a jurisdiction.
///
/// Used when a county/city program's coverage is free text rather than a
/// bare jurisdiction code.
#[derive(Debug, Clone)]
pub struct LocalityRule {
    /// The jurisdiction these patterns belong to.
    pub jurisdiction: JurisdictionCode,
    /// Patterns tried in order.
    pub patterns: Vec<CoveragePattern>,
}

/// Configuration tables for the filter engine.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Per-jurisdiction place-name match rules.
    pub locality_rules: Vec<LocalityRule>,
    /// Agency → category fallback: selecting the agency also admits rows of
    /// the mapped category.
    pub category_fallbacks: HashMap<Agency, String>,
    /// Program ids shown in state-local views even without an ownership
    /// sentinel or implementations (programs that inherently vary by state).
    pub statewide_ids: HashSet<ProgramId>,
}

impl FilterConfig {
    /// An empty configuration: no locality rules, no fallbacks.
    pub fn empty() -> Self {
        Self {
            locality_rules: Vec::new(),
            category_fallbacks: HashMap::new(),
            statewide_ids: HashSet::new(),
        }
    }

    /// The tables observed in the US catalog.
    pub fn us() -> Self {
        let contains = |s: &str| CoveragePattern::Contains(s.to_string());
        let exact = |s: &str| CoveragePattern::Exact(s.to_string());

        let locality_rules = vec![
            LocalityRule {
                jurisdiction: JurisdictionCode::new("CA"),
                patterns: vec![
                    contains("Los Angeles County"),
                    contains("Riverside County"),
                    contains("Alameda County"),
                    exact("Los Angeles"),
                    exact("Riverside County"),
                    contains("San Francisco"),
                ],
            },
            LocalityRule {
                jurisdiction: JurisdictionCode::new("TX"),
                patterns: vec![contains("Dallas County")],
            },
            LocalityRule {
                jurisdiction: JurisdictionCode::new("IL"),
                patterns: vec![contains("Chicago")],
            },
            LocalityRule {
                jurisdiction: JurisdictionCode::new("NY"),
                patterns: vec![contains("New York City")],
            },
            LocalityRule {
                jurisdiction: JurisdictionCode::new("MD"),
                patterns: vec![contains("Montgomery County")],
            },
        ];

        let category_fallbacks = HashMap::from([
            (Agency::new("IRS"), "Taxes".to_string()),
            (Agency::new("DOE"), "Energy".to_string()),
        ]);

        let statewide_ids = HashSet::from([ProgramId::new("state_income_tax")]);

        Self {
            locality_rules,
            category_fallbacks,
            statewide_ids,
        }
    }

    /// Whether `coverage` matches a locality rule for `jurisdiction`.
    pub fn locality_matches(&self, jurisdiction: &JurisdictionCode, coverage: &str) -> bool {
        self.locality_rules
            .iter()
            .filter(|rule| &rule.jurisdiction == jurisdiction)
            .any(|rule| rule.patterns.iter().any(|p| p.matches(coverage)))
    }

    /// The fallback category admitted for an agency selection, if any.
    pub fn fallback_category(&self, agency: &str) -> Option<&str> {
        self.category_fallbacks
            .get(&Agency::new(agency))
            .map(String::as_str)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self::us()
    }
}
