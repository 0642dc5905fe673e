//! Catalog loading
//!
//! Films are bulk-loaded once at startup from a JSON array. Loading is
//! all-or-nothing: a malformed entry or a repeated id rejects the file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::film::Film;

/// Result type for catalog loading
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog content is not a valid film array
    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share an id
    #[error("Duplicate film id {0} in catalog")]
    DuplicateId(i64),
}

/// Loads film catalogs from disk
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a catalog file
    pub fn load(path: &Path) -> CatalogResult<Vec<Film>> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content)
    }

    /// Parse catalog JSON, keeping file order
    pub fn parse(content: &str) -> CatalogResult<Vec<Film>> {
        let films: Vec<Film> = serde_json::from_str(content)?;

        let mut seen = HashSet::with_capacity(films.len());
        for film in &films {
            if !seen.insert(film.id) {
                return Err(CatalogError::DuplicateId(film.id));
            }
        }

        Ok(films)
    }
}
