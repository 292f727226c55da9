//! # Embedded Catalogs
//!
//! The per-country program catalogs shipped inside the binary. Each is a
//! JSON document compiled in with `include_str!`, parsed once on first use,
//! and cached for the life of the process.

use std::path::PathBuf;
use std::sync::OnceLock;

use covtrack_core::{CountryCode, Program};

use crate::error::CatalogError;

const US_JSON: &str = include_str!("../data/us.json");
const CANADA_JSON: &str = include_str!("../data/canada.json");
const UK_JSON: &str = include_str!("../data/uk.json");

/// The embedded catalog for a country.
///
/// Parsed on first call and cached; subsequent calls are lookups. Erring
/// here means the shipped data is malformed, which the catalog tests pin
/// against.
pub fn programs_for_country(code: CountryCode) -> Result<&'static [Program], CatalogError> {
    static US: OnceLock<Vec<Program>> = OnceLock::new();
    static CANADA: OnceLock<Vec<Program>> = OnceLock::new();
    static UK: OnceLock<Vec<Program>> = OnceLock::new();

    let (cell, raw) = match code {
        CountryCode::Us => (&US, US_JSON),
        CountryCode::Canada => (&CANADA, CANADA_JSON),
        CountryCode::Uk => (&UK, UK_JSON),
    };

    if let Some(programs) = cell.get() {
        return Ok(programs);
    }

    let parsed: Vec<Program> = serde_json::from_str(raw).map_err(|source| CatalogError::Json {
        path: PathBuf::from(format!("<embedded:{code}>")),
        source,
    })?;
    tracing::debug!(country = %code, programs = parsed.len(), "parsed embedded catalog");
    Ok(cell.get_or_init(|| parsed))
}
