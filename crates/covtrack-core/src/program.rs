//! # Program Catalog Model
//!
//! The catalog record types: [`Program`], its per-jurisdiction
//! [`StateImplementation`] sub-records, and the identifier newtypes they
//! hang off. Catalog records are loaded once per country and treated as
//! immutable for the session.
//!
//! A program that carries `state_implementations` is a "parent": the filter
//! engine replaces it with one synthesized row per implementation when the
//! dashboard is in a jurisdiction-focused view. Synthesis goes through the
//! single named constructor [`Program::state_variant`] so the set of
//! inherited fields cannot drift between call sites.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::jurisdiction::JurisdictionCode;
use crate::status::CoverageStatus;

// ─── Identifier newtypes ─────────────────────────────────────────────

/// Stable unique key of a catalog program (e.g. `snap`, `state_income_tax`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProgramId(pub String);

impl ProgramId {
    /// Wrap an id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of a synthesized per-jurisdiction row: `{parent}_{STATE}`.
    pub fn state_scoped(&self, state: &JurisdictionCode) -> Self {
        Self(format!("{}_{}", self.0, state.as_str()))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The agency tag attached to a program.
///
/// Either a concrete federal/national agency (`USDA`, `IRS`, `HMRC`, ...)
/// or one of the ownership sentinels `State` / `Local` marking sub-federal
/// programs. The set of concrete agencies varies by country, so this stays
/// a validated-by-convention newtype rather than a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agency(pub String);

impl Agency {
    /// Wrap an agency name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the `State` ownership sentinel.
    pub fn is_state(&self) -> bool {
        self.0 == "State"
    }

    /// Whether this is the `Local` ownership sentinel.
    pub fn is_local(&self) -> bool {
        self.0 == "Local"
    }

    /// Whether this agency marks a sub-federal (state- or locally-owned)
    /// program.
    pub fn is_sub_federal(&self) -> bool {
        self.is_state() || self.is_local()
    }
}

impl std::fmt::Display for Agency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Agency {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ─── External reference links ────────────────────────────────────────

/// External source-code reference URLs carried by a program or
/// implementation. Opaque to the derivation pipelines; passed through to
/// renderers unmodified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GithubLinks {
    /// Link to the parameter tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<String>,
    /// Link to the variable definitions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
    /// Link to the test suite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests: Option<String>,
}

impl GithubLinks {
    /// Whether no link is set.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_none() && self.variables.is_none() && self.tests.is_none()
    }
}

// ─── State implementation ────────────────────────────────────────────

/// A per-jurisdiction implementation of a parent program.
///
/// Carries its own status and optional display/link overrides; any field
/// left unset falls back to the parent's value when a row is synthesized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateImplementation {
    /// Jurisdiction code (2-letter state/province, or e.g. `GB-SCT`).
    pub state: JurisdictionCode,
    /// Status of this jurisdiction's implementation. Independent of the
    /// parent program's own status.
    pub status: CoverageStatus,
    /// Jurisdiction-specific program name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Jurisdiction-specific full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Jurisdiction-specific annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Jurisdiction-specific computation-graph variable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    /// Jurisdiction-specific reference links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_links: Option<GithubLinks>,
}

// ─── Program ─────────────────────────────────────────────────────────

/// A catalog program record.
///
/// Externally supplied, immutable at runtime. Parents (programs with
/// `state_implementations`) never parse their `coverage` text to derive
/// jurisdiction membership — only the implementation list and the
/// configured special-case tables determine applicability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// Stable unique key.
    pub id: ProgramId,
    /// Short display name.
    pub name: String,
    /// Long display name.
    #[serde(default)]
    pub full_name: String,
    /// Owning agency, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<Agency>,
    /// Free-form grouping label (e.g. `Taxes`, `Energy`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// The program's own baseline/federal-level status.
    pub status: CoverageStatus,
    /// Free-form geographic scope: a bare jurisdiction code, a country
    /// sentinel (`US`/`UK`/`Canada`), a comma-separated code list, or a
    /// place name like `Los Angeles County`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<String>,
    /// Identifier linking to the external computation-graph viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    /// Free-text annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// External reference links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_links: Option<GithubLinks>,
    /// Per-jurisdiction implementations. Present exactly when this is a
    /// parent program.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_implementations: Option<Vec<StateImplementation>>,
    /// When the record was last revised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,
}

impl Program {
    /// Whether this program carries per-jurisdiction implementations.
    pub fn is_parent(&self) -> bool {
        self.state_implementations
            .as_ref()
            .is_some_and(|impls| !impls.is_empty())
    }

    /// The implementation list, empty when absent.
    pub fn implementations(&self) -> &[StateImplementation] {
        self.state_implementations.as_deref().unwrap_or_default()
    }

    /// Whether the program's agency is the `State` or `Local` sentinel.
    pub fn has_sub_federal_agency(&self) -> bool {
        self.agency.as_ref().is_some_and(Agency::is_sub_federal)
    }

    /// Synthesize the jurisdiction-specific row for one implementation.
    ///
    /// The row is an ephemeral view model: id `{parent}_{STATE}`, the
    /// implementation's status, coverage set to the bare state code, and
    /// `state_implementations` cleared so the row is a leaf thereafter.
    /// Display and link fields use the implementation's value when present,
    /// else the parent's.
    pub fn state_variant(&self, imp: &StateImplementation) -> Program {
        Program {
            id: self.id.state_scoped(&imp.state),
            name: imp
                .name
                .clone()
                .unwrap_or_else(|| format!("{} ({})", self.name, imp.state)),
            full_name: imp.full_name.clone().unwrap_or_else(|| self.full_name.clone()),
            agency: self.agency.clone(),
            category: self.category.clone(),
            status: imp.status,
            coverage: Some(imp.state.as_str().to_string()),
            variable: imp.variable.clone().or_else(|| self.variable.clone()),
            notes: imp.notes.clone().or_else(|| self.notes.clone()),
            github_links: imp.github_links.clone().or_else(|| self.github_links.clone()),
            state_implementations: None,
            last_updated: self.last_updated,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parent() -> Program {
        Program {
            id: ProgramId::new("tanf"),
            name: "TANF".to_string(),
            full_name: "Temporary Assistance for Needy Families".to_string(),
            agency: Some(Agency::new("HHS")),
            category: None,
            status: CoverageStatus::InProgress,
            coverage: Some("CA, NY".to_string()),
            variable: Some("tanf".to_string()),
            notes: Some("parent notes".to_string()),
            github_links: Some(GithubLinks {
                parameters: Some("https://example.org/params".to_string()),
                ..GithubLinks::default()
            }),
            state_implementations: Some(vec![
                StateImplementation {
                    state: JurisdictionCode::new("CA"),
                    status: CoverageStatus::Complete,
                    name: Some("CalWORKs Cash Benefit".to_string()),
                    full_name: Some("California CalWORKs Cash Benefit".to_string()),
                    notes: None,
                    variable: Some("ca_tanf".to_string()),
                    github_links: None,
                },
                StateImplementation {
                    state: JurisdictionCode::new("NY"),
                    status: CoverageStatus::NotStarted,
                    name: None,
                    full_name: None,
                    notes: None,
                    variable: None,
                    github_links: None,
                },
            ]),
            last_updated: None,
        }
    }

    #[test]
    fn test_is_parent() {
        assert!(parent().is_parent());
        let mut leaf = parent();
        leaf.state_implementations = None;
        assert!(!leaf.is_parent());
        leaf.state_implementations = Some(vec![]);
        assert!(!leaf.is_parent());
    }

    #[test]
    fn test_state_variant_overrides() {
        let p = parent();
        let ca = p.state_variant(&p.implementations()[0]);
        assert_eq!(ca.id.as_str(), "tanf_CA");
        assert_eq!(ca.name, "CalWORKs Cash Benefit");
        assert_eq!(ca.full_name, "California CalWORKs Cash Benefit");
        assert_eq!(ca.status, CoverageStatus::Complete);
        assert_eq!(ca.coverage.as_deref(), Some("CA"));
        assert_eq!(ca.variable.as_deref(), Some("ca_tanf"));
        assert!(ca.state_implementations.is_none());
    }

    #[test]
    fn test_state_variant_fallbacks() {
        let p = parent();
        let ny = p.state_variant(&p.implementations()[1]);
        assert_eq!(ny.id.as_str(), "tanf_NY");
        // No implementation name: derived "<parent> (<STATE>)" label.
        assert_eq!(ny.name, "TANF (NY)");
        assert_eq!(ny.full_name, p.full_name);
        assert_eq!(ny.status, CoverageStatus::NotStarted);
        assert_eq!(ny.notes.as_deref(), Some("parent notes"));
        assert_eq!(ny.variable.as_deref(), Some("tanf"));
        assert_eq!(ny.github_links, p.github_links);
    }

    #[test]
    fn test_agency_sentinels() {
        assert!(Agency::new("State").is_state());
        assert!(Agency::new("Local").is_local());
        assert!(Agency::new("Local").is_sub_federal());
        assert!(!Agency::new("USDA").is_sub_federal());
        // Sentinels are case-sensitive.
        assert!(!Agency::new("state").is_state());
    }

    #[test]
    fn test_serde_camel_case_wire_form() {
        let p = parent();
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("stateImplementations").is_some());
        assert_eq!(json["status"], "inProgress");
        assert_eq!(json["stateImplementations"][0]["state"], "CA");
        let back: Program = serde_json::from_value(json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let p: Program = serde_json::from_str(
            r#"{"id":"snap","name":"SNAP","fullName":"Supplemental Nutrition Assistance Program","status":"complete"}"#,
        )
        .unwrap();
        assert!(p.agency.is_none());
        assert!(p.coverage.is_none());
        assert!(!p.is_parent());
    }

    #[test]
    fn test_state_scoped_id() {
        let id = ProgramId::new("ssi_state_supplement");
        assert_eq!(
            id.state_scoped(&JurisdictionCode::new("CA")).as_str(),
            "ssi_state_supplement_CA"
        );
    }
}
