//! # Catalog File Loading
//!
//! Reads an external catalog from disk, dispatching on the file extension:
//! `.json` for JSON, `.yaml`/`.yml` for YAML. The schema is the same in
//! both formats (camelCase field names).

use std::fs;
use std::path::Path;

use covtrack_core::Program;

use crate::error::CatalogError;

/// Load a catalog file.
///
/// The result is unvalidated; run
/// [`validate_catalog`](crate::validate::validate_catalog) before trusting
/// the ids.
pub fn load_catalog(path: &Path) -> Result<Vec<Program>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let programs: Vec<Program> = match extension.as_deref() {
        Some("json") => serde_json::from_str(&raw).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&raw).map_err(|source| CatalogError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
        }
        _ => {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    tracing::info!(path = %path.display(), programs = programs.len(), "loaded catalog");
    Ok(programs)
}
