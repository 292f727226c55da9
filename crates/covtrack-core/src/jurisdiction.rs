//! # Jurisdiction Types
//!
//! Newtype and metadata for sub-national jurisdictions: US states, Canadian
//! provinces and territories, UK constituent countries. The matrix view also
//! uses a jurisdiction code for its synthetic "Federal" column, so that one
//! column list can address the whole grid.

use serde::{Deserialize, Serialize};

/// A jurisdiction code.
///
/// Usually a 2-letter state/province abbreviation (`CA`, `NY`, `QC`), but
/// also special codes like `GB-SCT` and the `Federal` matrix column label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JurisdictionCode(pub String);

impl JurisdictionCode {
    /// Wrap a code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The synthetic federal/national column used by the matrix view.
    pub fn federal() -> Self {
        Self("Federal".to_string())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the synthetic federal column rather than a real
    /// sub-national jurisdiction.
    pub fn is_federal(&self) -> bool {
        self.0 == "Federal"
    }
}

impl std::fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JurisdictionCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A jurisdiction with its display name, as listed in country metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// The jurisdiction code.
    pub code: JurisdictionCode,
    /// Human-readable name.
    pub name: String,
}

impl Jurisdiction {
    /// Construct a jurisdiction entry.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: JurisdictionCode::new(code),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_federal_column() {
        let fed = JurisdictionCode::federal();
        assert!(fed.is_federal());
        assert_eq!(fed.as_str(), "Federal");
    }

    #[test]
    fn test_state_code_not_federal() {
        assert!(!JurisdictionCode::new("CA").is_federal());
    }

    #[test]
    fn test_display() {
        assert_eq!(JurisdictionCode::new("GB-SCT").to_string(), "GB-SCT");
    }
}
