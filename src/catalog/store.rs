//! Record store
//!
//! The persistence seam behind the query engine. The engine only ever asks for
//! scans, lookups and deletes; how the records are kept is up to the store.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use thiserror::Error;

use super::film::{Film, Role};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store cannot serve requests
    #[error("Record store unavailable: {0}")]
    Unavailable(String),
}

/// Read/delete access to the film records.
///
/// Scans return records in store iteration order.
pub trait RecordStore: Send + Sync {
    /// All records
    fn find_all(&self) -> StoreResult<Vec<Film>>;

    /// Record with the given id, if any
    fn find_by_id(&self, id: i64) -> StoreResult<Option<Film>>;

    /// Records whose credited person for `role` equals `name` exactly
    fn find_all_by_person(&self, role: Role, name: &str) -> StoreResult<Vec<Film>>;

    /// Records whose release date equals `date` exactly
    fn find_all_by_year(&self, date: NaiveDate) -> StoreResult<Vec<Film>>;

    /// Remove a record. Returns whether a record was removed; a missing id is
    /// not an error.
    fn delete_by_id(&self, id: i64) -> StoreResult<bool>;

    /// Number of records currently held
    fn len(&self) -> StoreResult<usize>;

    fn find_all_by_director(&self, director: &str) -> StoreResult<Vec<Film>> {
        self.find_all_by_person(Role::Director, director)
    }

    fn find_all_by_actor(&self, actor: &str) -> StoreResult<Vec<Film>> {
        self.find_all_by_person(Role::Actor, actor)
    }

    fn find_all_by_actress(&self, actress: &str) -> StoreResult<Vec<Film>> {
        self.find_all_by_person(Role::Actress, actress)
    }
}

/// In-memory store over a vector of films, in load order
#[derive(Debug, Default)]
pub struct InMemoryStore {
    films: RwLock<Vec<Film>>,
}

impl InMemoryStore {
    pub fn new(films: Vec<Film>) -> Self {
        Self {
            films: RwLock::new(films),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Film>>> {
        self.films
            .read()
            .map_err(|_| StoreError::Unavailable("film lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Film>>> {
        self.films
            .write()
            .map_err(|_| StoreError::Unavailable("film lock poisoned".to_string()))
    }

    fn scan<P>(&self, predicate: P) -> StoreResult<Vec<Film>>
    where
        P: Fn(&Film) -> bool,
    {
        Ok(self
            .read()?
            .iter()
            .filter(|film| predicate(film))
            .cloned()
            .collect())
    }
}

impl RecordStore for InMemoryStore {
    fn find_all(&self) -> StoreResult<Vec<Film>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: i64) -> StoreResult<Option<Film>> {
        Ok(self.read()?.iter().find(|film| film.id == id).cloned())
    }

    fn find_all_by_person(&self, role: Role, name: &str) -> StoreResult<Vec<Film>> {
        self.scan(|film| film.person(role) == name)
    }

    fn find_all_by_year(&self, date: NaiveDate) -> StoreResult<Vec<Film>> {
        self.scan(|film| film.year == date)
    }

    fn delete_by_id(&self, id: i64) -> StoreResult<bool> {
        let mut films = self.write()?;
        let before = films.len();
        films.retain(|film| film.id != id);
        Ok(films.len() < before)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}
