//! Film record
//!
//! A single catalog entry. Person fields use the `"LastName, FirstName"`
//! convention of the source catalog; an empty string means nobody is credited.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Base path of every film resource.
pub const FILMS_BASE_PATH: &str = "/api/films";

/// Path of the full collection resource.
pub const ALL_FILMS_PATH: &str = "/api/films/allFilms";

/// A film record as loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// Stable identity, unique within a catalog
    pub id: i64,

    pub title: String,

    /// Release date; bucket queries only look at the year component
    pub year: NaiveDate,

    #[serde(default)]
    pub length: i32,

    #[serde(default)]
    pub subject: String,

    #[serde(default)]
    pub actor: String,

    #[serde(default)]
    pub actress: String,

    #[serde(default)]
    pub director: String,

    #[serde(default)]
    pub popularity: Option<i32>,

    #[serde(default)]
    pub awards: String,
}

impl Film {
    /// Calendar year of the release date
    pub fn release_year(&self) -> i32 {
        self.year.year()
    }

    /// Canonical path of this film's resource
    pub fn resource_path(&self) -> String {
        resource_path(self.id)
    }

    /// Returns the credited person for a role
    pub fn person(&self, role: Role) -> &str {
        match role {
            Role::Actor => &self.actor,
            Role::Actress => &self.actress,
            Role::Director => &self.director,
        }
    }
}

/// Canonical path for a film id
pub fn resource_path(id: i64) -> String {
    format!("{}/{}", FILMS_BASE_PATH, id)
}

/// Credited roles that can be listed and searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Actor,
    Actress,
    Director,
}

impl Role {
    /// Field name used in projections and query output
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Actor => "actor",
            Role::Actress => "actress",
            Role::Director => "director",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_optional_fields_default() {
        let film: Film = serde_json::from_value(json!({
            "id": 7,
            "title": "Tokyo Story",
            "year": "1953-11-03"
        }))
        .unwrap();

        assert_eq!(film.length, 0);
        assert_eq!(film.actor, "");
        assert_eq!(film.director, "");
        assert_eq!(film.popularity, None);
        assert_eq!(film.release_year(), 1953);
    }

    #[test]
    fn test_year_serializes_as_iso_date() {
        let film: Film = serde_json::from_value(json!({
            "id": 1,
            "title": "Alien",
            "year": "1979-05-25"
        }))
        .unwrap();

        let value = serde_json::to_value(&film).unwrap();
        assert_eq!(value["year"], "1979-05-25");
    }

    #[test]
    fn test_resource_path() {
        let film: Film = serde_json::from_value(json!({
            "id": 42,
            "title": "Heat",
            "year": "1995-12-15"
        }))
        .unwrap();

        assert_eq!(film.resource_path(), "/api/films/42");
    }
}
