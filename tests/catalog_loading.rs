//! Catalog Loading Tests
//!
//! - Catalog files load in file order
//! - Optional fields take their defaults
//! - Duplicate ids and malformed files are rejected whole
//! - The bundled demo catalog loads and answers queries

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use filmdb::catalog::{CatalogError, CatalogLoader, InMemoryStore, RecordStore};
use filmdb::query::QueryEngine;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn write_catalog(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("films.json");
    fs::write(&path, content).unwrap();
    path
}

fn demo_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("demos")
        .join("films.json")
}

// =============================================================================
// Loading Tests
// =============================================================================

#[test]
fn test_load_keeps_file_order() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"[
            {"id": 20, "title": "Heat", "year": "1995-12-15", "length": 170},
            {"id": 10, "title": "Fargo", "year": "1996-03-08", "length": 98}
        ]"#,
    );

    let films = CatalogLoader::load(&path).unwrap();
    let ids: Vec<i64> = films.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![20, 10]);
}

#[test]
fn test_optional_fields_default() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"[{"id": 1, "title": "Untitled", "year": "1950-01-01"}]"#,
    );

    let film = &CatalogLoader::load(&path).unwrap()[0];
    assert_eq!(film.length, 0);
    assert_eq!(film.director, "");
    assert_eq!(film.popularity, None);
}

#[test]
fn test_duplicate_id_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"[
            {"id": 5, "title": "A", "year": "1950-01-01"},
            {"id": 5, "title": "B", "year": "1951-01-01"}
        ]"#,
    );

    assert!(matches!(
        CatalogLoader::load(&path),
        Err(CatalogError::DuplicateId(5))
    ));
}

#[test]
fn test_bad_date_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        r#"[{"id": 1, "title": "A", "year": "sometime"}]"#,
    );

    assert!(matches!(
        CatalogLoader::load(&path),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = CatalogLoader::load(&dir.path().join("absent.json")).unwrap_err();

    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

// =============================================================================
// Demo Catalog Tests
// =============================================================================

#[test]
fn test_demo_catalog_loads() {
    let films = CatalogLoader::load(&demo_catalog()).unwrap();
    assert!(!films.is_empty());
    let films_len = films.len();

    let store = Arc::new(InMemoryStore::new(films));
    assert_eq!(store.len().unwrap(), films_len);

    let engine = QueryEngine::new(store);
    let titles: Vec<String> = engine
        .list_titles_by_director("Woody", "Allen")
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["Annie Hall", "Manhattan"]);
}
