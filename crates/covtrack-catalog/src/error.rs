//! # Catalog Errors
//!
//! Everything that can go wrong while bringing a catalog into memory:
//! file I/O, malformed JSON/YAML, and invariant violations found by
//! validation. Derivations downstream of a loaded catalog never error.

use std::path::PathBuf;

use thiserror::Error;

use covtrack_core::{JurisdictionCode, ProgramId};

/// Catalog ingestion error.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog file.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON catalog did not parse.
    #[error("malformed JSON catalog {path}: {source}")]
    Json {
        /// Path of the file (or an embedded-catalog label).
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A YAML catalog did not parse.
    #[error("malformed YAML catalog {path}: {source}")]
    Yaml {
        /// Path of the file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The file extension is not a supported catalog format.
    #[error("unsupported catalog format: {path} (expected .json, .yaml, or .yml)")]
    UnsupportedFormat {
        /// Path of the file.
        path: PathBuf,
    },

    /// A program record has an empty id.
    #[error("program at index {index} has an empty id")]
    EmptyProgramId {
        /// Position in the catalog.
        index: usize,
    },

    /// Two program records share an id.
    #[error("duplicate program id: {id}")]
    DuplicateProgramId {
        /// The repeated id.
        id: ProgramId,
    },

    /// A program lists the same jurisdiction twice in its implementations.
    #[error("program {id} has duplicate implementation state {state}")]
    DuplicateImplementationState {
        /// The parent program.
        id: ProgramId,
        /// The repeated jurisdiction.
        state: JurisdictionCode,
    },
}
