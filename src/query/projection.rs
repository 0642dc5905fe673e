//! Result projections
//!
//! Each operation returns a fixed record shape. Field order in these structs
//! is the key order of the serialized output.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::catalog::{Film, Role};

use super::sorter::{SortField, SortKey, Sortable};

/// `{id, title}` pair of the title index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleIndexEntry {
    pub id: i64,
    pub title: String,
}

/// A credited person, serialized as `{"<role>": "<name>"}`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName {
    pub role: Role,
    pub name: String,
}

impl Serialize for PersonName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.role.as_str(), &self.name)?;
        map.end()
    }
}

/// `{title}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleEntry {
    pub title: String,
}

/// `{title, length}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleLength {
    pub title: String,
    pub length: i32,
}

/// `{year, title}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTitle {
    pub year: NaiveDate,
    pub title: String,
}

impl From<&Film> for TitleIndexEntry {
    fn from(film: &Film) -> Self {
        Self {
            id: film.id,
            title: film.title.clone(),
        }
    }
}

impl From<&Film> for TitleEntry {
    fn from(film: &Film) -> Self {
        Self {
            title: film.title.clone(),
        }
    }
}

impl From<&Film> for TitleLength {
    fn from(film: &Film) -> Self {
        Self {
            title: film.title.clone(),
            length: film.length,
        }
    }
}

impl From<&Film> for YearTitle {
    fn from(film: &Film) -> Self {
        Self {
            year: film.year,
            title: film.title.clone(),
        }
    }
}

impl Sortable for PersonName {
    fn sort_key(&self, field: SortField) -> Option<SortKey<'_>> {
        match field {
            SortField::Name => Some(SortKey::Text(&self.name)),
            _ => None,
        }
    }
}

impl Sortable for TitleEntry {
    fn sort_key(&self, field: SortField) -> Option<SortKey<'_>> {
        match field {
            SortField::Title => Some(SortKey::Text(&self.title)),
            _ => None,
        }
    }
}

impl Sortable for TitleLength {
    fn sort_key(&self, field: SortField) -> Option<SortKey<'_>> {
        match field {
            SortField::Title => Some(SortKey::Text(&self.title)),
            SortField::Length => Some(SortKey::Number(self.length.into())),
            _ => None,
        }
    }
}

impl Sortable for YearTitle {
    fn sort_key(&self, field: SortField) -> Option<SortKey<'_>> {
        match field {
            SortField::Title => Some(SortKey::Text(&self.title)),
            SortField::Year => Some(SortKey::Date(self.year)),
            _ => None,
        }
    }
}
