//! Film catalog
//!
//! The record model, the store seam the query engine reads through, and the
//! startup loader that fills an in-memory store from a JSON file.

mod film;
mod loader;
mod store;

pub use film::{resource_path, Film, Role, ALL_FILMS_PATH, FILMS_BASE_PATH};
pub use loader::{CatalogError, CatalogLoader, CatalogResult};
pub use store::{InMemoryStore, RecordStore, StoreError, StoreResult};
