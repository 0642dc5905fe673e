//! One-shot query requests
//!
//! A JSON form of every engine operation, used by the `query` command:
//!
//! ```json
//! {"op": "director", "firstName": "Woody", "secondName": "Allen"}
//! {"op": "length", "lt": "90", "gt": "45"}
//! ```

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::{RecordStore, Role};

use super::engine::QueryEngine;
use super::errors::{QueryError, QueryResult};
use super::params::parse_date;

/// A single engine operation with its parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum FilmQuery {
    AllFilms,
    Titles,
    Film {
        id: i64,
    },
    Actors,
    Actresses,
    Directors,
    Date {
        year: String,
    },
    Director {
        #[serde(rename = "firstName")]
        first_name: String,
        #[serde(rename = "secondName")]
        second_name: String,
    },
    Actor {
        #[serde(rename = "firstName")]
        first_name: String,
        #[serde(rename = "secondName")]
        second_name: String,
    },
    Actress {
        #[serde(rename = "firstName")]
        first_name: String,
        #[serde(rename = "secondName")]
        second_name: String,
    },
    Length {
        lt: String,
        gt: String,
    },
    Decade {
        suffix: String,
    },
    Century {
        suffix: String,
    },
    Delete {
        id: i64,
    },
}

impl FilmQuery {
    /// Operation name, as used in logs
    pub fn op(&self) -> &'static str {
        match self {
            FilmQuery::AllFilms => "allFilms",
            FilmQuery::Titles => "titles",
            FilmQuery::Film { .. } => "film",
            FilmQuery::Actors => "actors",
            FilmQuery::Actresses => "actresses",
            FilmQuery::Directors => "directors",
            FilmQuery::Date { .. } => "date",
            FilmQuery::Director { .. } => "director",
            FilmQuery::Actor { .. } => "actor",
            FilmQuery::Actress { .. } => "actress",
            FilmQuery::Length { .. } => "length",
            FilmQuery::Decade { .. } => "decade",
            FilmQuery::Century { .. } => "century",
            FilmQuery::Delete { .. } => "delete",
        }
    }

    /// Parse a request from JSON
    ///
    /// An absent field is a `MissingParameter`; anything else that does not
    /// fit an operation is an `InvalidParameter` against `op`.
    pub fn from_json(value: Value) -> QueryResult<Self> {
        serde_json::from_value(value).map_err(request_error)
    }
}

fn request_error(err: serde_json::Error) -> QueryError {
    let message = err.to_string();
    match message
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        Some(field) => QueryError::MissingParameter(field.to_string()),
        None => QueryError::invalid_parameter("op", message),
    }
}

impl<S: RecordStore> QueryEngine<S> {
    /// Runs a request and serializes its result
    pub fn execute(&self, query: &FilmQuery) -> QueryResult<Value> {
        let value = match query {
            FilmQuery::AllFilms => to_value(self.list_all()?)?,
            FilmQuery::Titles => to_value(self.list_title_index()?)?,
            FilmQuery::Film { id } => to_value(self.get_by_id(*id)?)?,
            FilmQuery::Actors => to_value(self.list_person_names(Role::Actor)?)?,
            FilmQuery::Actresses => to_value(self.list_person_names(Role::Actress)?)?,
            FilmQuery::Directors => to_value(self.list_person_names(Role::Director)?)?,
            FilmQuery::Date { year } => {
                to_value(self.list_titles_by_year(parse_date("year", year)?)?)?
            }
            FilmQuery::Director {
                first_name,
                second_name,
            } => to_value(self.list_titles_by_director(first_name, second_name)?)?,
            FilmQuery::Actor {
                first_name,
                second_name,
            } => to_value(self.list_titles_by_actor(first_name, second_name)?)?,
            FilmQuery::Actress {
                first_name,
                second_name,
            } => to_value(self.list_titles_by_actress(first_name, second_name)?)?,
            FilmQuery::Length { lt, gt } => to_value(self.list_by_length_range(lt, gt)?)?,
            FilmQuery::Decade { suffix } => to_value(self.list_by_decade(suffix)?)?,
            FilmQuery::Century { suffix } => to_value(self.list_by_century(suffix)?)?,
            FilmQuery::Delete { id } => {
                let removed = self.delete_by_id(*id)?;
                serde_json::json!({ "id": id, "removed": removed })
            }
        };

        Ok(value)
    }
}

fn to_value<T: serde::Serialize>(data: T) -> QueryResult<Value> {
    serde_json::to_value(data).map_err(|e| QueryError::Encoding(e.to_string()))
}
