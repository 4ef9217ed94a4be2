use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::catalog::model::Catalog;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Reads the role catalog from a JSON file of the form `{"Role": ["Skill", ...]}`.
///
/// Called once at startup. Any failure is fatal to the process; there is no
/// degraded mode with a partial catalog.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = parse_catalog(&raw).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if catalog.is_empty() {
        warn!("Catalog at {} has no roles", path.display());
    }
    info!(
        "Loaded catalog from {}: {} roles, {} distinct skills",
        path.display(),
        catalog.len(),
        catalog.all_skills().len()
    );

    Ok(catalog)
}

pub fn parse_catalog(raw: &str) -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(raw)
}
