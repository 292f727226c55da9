//! # Error Types
//!
//! Top-level error enum for the Covtrack workspace. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The derivation pipelines themselves are total functions and never
//! return errors; this type covers the parsing and catalog-ingestion
//! boundary only.

use thiserror::Error;

/// Top-level error type for Covtrack.
#[derive(Error, Debug)]
pub enum CovtrackError {
    /// Failed to parse a domain identifier (status, country, level mode).
    #[error("parse error: {0}")]
    Parse(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CovtrackError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
