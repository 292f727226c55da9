//! # covtrack-catalog — Program Catalog Ingestion
//!
//! Brings program catalogs into memory and summarizes them:
//!
//! - **Embedded catalogs**: one JSON document per supported country,
//!   compiled into the binary and parsed once.
//! - **File loading**: external JSON or YAML catalogs with the same schema.
//! - **Validation**: unique program ids and unique implementation states.
//!   Free-text coverage is never validated; unknown place names degrade to
//!   "no match" downstream instead of failing ingestion.
//! - **Roll-ups and breakdowns**: per-status counts, category/agency
//!   counts, and jurisdiction extraction for the state picker.
//!
//! Everything past ingestion treats the catalog as an immutable slice of
//! [`covtrack_core::Program`] records.

pub mod embedded;
pub mod error;
pub mod extract;
pub mod load;
pub mod rollup;
pub mod stats;
pub mod validate;

pub use embedded::programs_for_country;
pub use error::CatalogError;
pub use extract::extract_states;
pub use load::load_catalog;
pub use rollup::{status_counts, RollupConfig, StatusCounts};
pub use stats::{program_breakdown, LabeledCount, ProgramBreakdown};
pub use validate::validate_catalog;
