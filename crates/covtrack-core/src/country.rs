//! # Country Metadata
//!
//! Static lookup tables for the supported countries: jurisdiction lists,
//! display labels, agency pickers, and repository link bases. The dashboard
//! selects one catalog per country; everything here is configuration data,
//! not logic.

use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::CovtrackError;
use crate::jurisdiction::{Jurisdiction, JurisdictionCode};

/// Supported country selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountryCode {
    /// United States.
    Us,
    /// Canada.
    Canada,
    /// United Kingdom.
    Uk,
}

impl CountryCode {
    /// All supported countries.
    pub fn all() -> &'static [CountryCode] {
        &[Self::Us, Self::Canada, Self::Uk]
    }

    /// Lowercase string identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Canada => "canada",
            Self::Uk => "uk",
        }
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = CovtrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "us" => Ok(Self::Us),
            "canada" => Ok(Self::Canada),
            "uk" => Ok(Self::Uk),
            other => Err(CovtrackError::Parse(format!("unknown country: {other:?}"))),
        }
    }
}

/// Static metadata for one country.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    /// The country selector.
    pub code: CountryCode,
    /// Short display name.
    pub name: String,
    /// Full display name.
    pub full_name: String,
    /// Name of the rules repository this catalog tracks.
    pub repo_name: String,
    /// Base URL for parameter/variable links.
    pub github_base: String,
    /// Base URL for test links.
    pub tests_base: String,
    /// Sub-national jurisdictions, in display order.
    pub jurisdictions: Vec<Jurisdiction>,
    /// Label for the national level ("Federal", "National").
    pub federal_label: String,
    /// Label for the regional level ("State", "Province", "Country").
    pub regional_label: String,
    /// Agencies offered by the filter picker.
    pub agencies: Vec<String>,
    /// The coverage sentinel meaning "the whole country" ("US", "Canada", "UK").
    pub coverage_sentinel: String,
}

impl Country {
    /// Look up the static metadata for a country.
    pub fn get(code: CountryCode) -> &'static Country {
        match code {
            CountryCode::Us => us(),
            CountryCode::Canada => canada(),
            CountryCode::Uk => uk(),
        }
    }

    /// Jurisdiction codes in display order.
    pub fn jurisdiction_codes(&self) -> Vec<JurisdictionCode> {
        self.jurisdictions.iter().map(|j| j.code.clone()).collect()
    }

    /// Whether `code` names one of this country's jurisdictions.
    pub fn contains(&self, code: &JurisdictionCode) -> bool {
        self.jurisdictions.iter().any(|j| &j.code == code)
    }
}

fn us() -> &'static Country {
    static US: OnceLock<Country> = OnceLock::new();
    US.get_or_init(|| Country {
        code: CountryCode::Us,
        name: "United States".to_string(),
        full_name: "United States".to_string(),
        repo_name: "policyengine-us".to_string(),
        github_base: "https://github.com/PolicyEngine/policyengine-us/tree/master/policyengine_us"
            .to_string(),
        tests_base:
            "https://github.com/PolicyEngine/policyengine-us/tree/master/policyengine_us/tests"
                .to_string(),
        jurisdictions: vec![
            Jurisdiction::new("AL", "Alabama"),
            Jurisdiction::new("AK", "Alaska"),
            Jurisdiction::new("AZ", "Arizona"),
            Jurisdiction::new("AR", "Arkansas"),
            Jurisdiction::new("CA", "California"),
            Jurisdiction::new("CO", "Colorado"),
            Jurisdiction::new("CT", "Connecticut"),
            Jurisdiction::new("DE", "Delaware"),
            Jurisdiction::new("DC", "District of Columbia"),
            Jurisdiction::new("FL", "Florida"),
            Jurisdiction::new("GA", "Georgia"),
            Jurisdiction::new("HI", "Hawaii"),
            Jurisdiction::new("ID", "Idaho"),
            Jurisdiction::new("IL", "Illinois"),
            Jurisdiction::new("IN", "Indiana"),
            Jurisdiction::new("IA", "Iowa"),
            Jurisdiction::new("KS", "Kansas"),
            Jurisdiction::new("KY", "Kentucky"),
            Jurisdiction::new("LA", "Louisiana"),
            Jurisdiction::new("ME", "Maine"),
            Jurisdiction::new("MD", "Maryland"),
            Jurisdiction::new("MA", "Massachusetts"),
            Jurisdiction::new("MI", "Michigan"),
            Jurisdiction::new("MN", "Minnesota"),
            Jurisdiction::new("MS", "Mississippi"),
            Jurisdiction::new("MO", "Missouri"),
            Jurisdiction::new("MT", "Montana"),
            Jurisdiction::new("NE", "Nebraska"),
            Jurisdiction::new("NV", "Nevada"),
            Jurisdiction::new("NH", "New Hampshire"),
            Jurisdiction::new("NJ", "New Jersey"),
            Jurisdiction::new("NM", "New Mexico"),
            Jurisdiction::new("NY", "New York"),
            Jurisdiction::new("NC", "North Carolina"),
            Jurisdiction::new("ND", "North Dakota"),
            Jurisdiction::new("OH", "Ohio"),
            Jurisdiction::new("OK", "Oklahoma"),
            Jurisdiction::new("OR", "Oregon"),
            Jurisdiction::new("PA", "Pennsylvania"),
            Jurisdiction::new("RI", "Rhode Island"),
            Jurisdiction::new("SC", "South Carolina"),
            Jurisdiction::new("SD", "South Dakota"),
            Jurisdiction::new("TN", "Tennessee"),
            Jurisdiction::new("TX", "Texas"),
            Jurisdiction::new("UT", "Utah"),
            Jurisdiction::new("VT", "Vermont"),
            Jurisdiction::new("VA", "Virginia"),
            Jurisdiction::new("WA", "Washington"),
            Jurisdiction::new("WV", "West Virginia"),
            Jurisdiction::new("WI", "Wisconsin"),
            Jurisdiction::new("WY", "Wyoming"),
        ],
        federal_label: "Federal".to_string(),
        regional_label: "State".to_string(),
        agencies: ["USDA", "HHS", "SSA", "IRS", "HUD", "DOE", "ED", "DOL", "FCC", "ACA"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        coverage_sentinel: "US".to_string(),
    })
}

fn canada() -> &'static Country {
    static CANADA: OnceLock<Country> = OnceLock::new();
    CANADA.get_or_init(|| Country {
        code: CountryCode::Canada,
        name: "Canada".to_string(),
        full_name: "Canada".to_string(),
        repo_name: "policyengine-canada".to_string(),
        github_base:
            "https://github.com/PolicyEngine/policyengine-canada/tree/master/policyengine_canada"
                .to_string(),
        tests_base:
            "https://github.com/PolicyEngine/policyengine-canada/tree/master/policyengine_canada/tests"
                .to_string(),
        jurisdictions: vec![
            Jurisdiction::new("AB", "Alberta"),
            Jurisdiction::new("BC", "British Columbia"),
            Jurisdiction::new("MB", "Manitoba"),
            Jurisdiction::new("NB", "New Brunswick"),
            Jurisdiction::new("NL", "Newfoundland and Labrador"),
            Jurisdiction::new("NS", "Nova Scotia"),
            Jurisdiction::new("NT", "Northwest Territories"),
            Jurisdiction::new("NU", "Nunavut"),
            Jurisdiction::new("ON", "Ontario"),
            Jurisdiction::new("PE", "Prince Edward Island"),
            Jurisdiction::new("QC", "Quebec"),
            Jurisdiction::new("SK", "Saskatchewan"),
            Jurisdiction::new("YT", "Yukon"),
        ],
        federal_label: "Federal".to_string(),
        regional_label: "Province".to_string(),
        agencies: ["CRA", "ESDC"].iter().map(|s| s.to_string()).collect(),
        coverage_sentinel: "Canada".to_string(),
    })
}

fn uk() -> &'static Country {
    static UK: OnceLock<Country> = OnceLock::new();
    UK.get_or_init(|| Country {
        code: CountryCode::Uk,
        name: "United Kingdom".to_string(),
        full_name: "United Kingdom".to_string(),
        repo_name: "policyengine-uk".to_string(),
        github_base: "https://github.com/PolicyEngine/policyengine-uk/tree/master/policyengine_uk"
            .to_string(),
        tests_base:
            "https://github.com/PolicyEngine/policyengine-uk/tree/master/policyengine_uk/tests"
                .to_string(),
        jurisdictions: vec![
            Jurisdiction::new("GB-ENG", "England"),
            Jurisdiction::new("GB-SCT", "Scotland"),
            Jurisdiction::new("GB-WLS", "Wales"),
            Jurisdiction::new("GB-NIR", "Northern Ireland"),
        ],
        federal_label: "National".to_string(),
        regional_label: "Country".to_string(),
        agencies: ["DWP", "HMRC", "DfE"].iter().map(|s| s.to_string()).collect(),
        coverage_sentinel: "UK".to_string(),
    })
}
