//! # Catalog Input Resolution
//!
//! Shared flags for choosing which catalog a subcommand operates on:
//! a country's embedded catalog, or an external JSON/YAML file.

use std::path::PathBuf;

use clap::Args;

use covtrack_catalog::{load_catalog, programs_for_country, validate_catalog};
use covtrack_core::{CountryCode, Program};

/// Catalog selection flags shared by the read-side subcommands.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Country whose embedded catalog to use (us, canada, uk).
    #[arg(long, default_value = "us")]
    pub country: String,

    /// Load the catalog from a JSON or YAML file instead of the embedded
    /// data. The country still selects the jurisdiction universe.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl CatalogArgs {
    /// The selected country.
    pub fn country_code(&self) -> anyhow::Result<CountryCode> {
        Ok(self.country.parse()?)
    }

    /// Resolve the program list. External files are validated before use;
    /// embedded catalogs are trusted (their validity is pinned by tests).
    pub fn programs(&self) -> anyhow::Result<Vec<Program>> {
        match &self.catalog {
            Some(path) => {
                let programs = load_catalog(path)?;
                validate_catalog(&programs)?;
                Ok(programs)
            }
            None => Ok(programs_for_country(self.country_code()?)?.to_vec()),
        }
    }
}
