//! Parameter parsing
//!
//! Turns raw path and query-string values into the typed inputs of the
//! engine. Every failure names the offending parameter.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::errors::{QueryError, QueryResult};

/// Date format accepted by date parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a film id
pub fn parse_id(value: &str) -> QueryResult<i64> {
    value
        .parse()
        .map_err(|_| QueryError::invalid_parameter("id", value))
}

/// Parse an integer parameter
pub fn parse_int(name: &str, value: &str) -> QueryResult<i32> {
    value
        .parse()
        .map_err(|_| QueryError::invalid_parameter(name, value))
}

/// Parse a `YYYY-MM-DD` date parameter
pub fn parse_date(name: &str, value: &str) -> QueryResult<NaiveDate> {
    // chrono skips blanks ahead of numeric fields
    if value.chars().any(char::is_whitespace) {
        return Err(QueryError::invalid_parameter(name, value));
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| QueryError::invalid_parameter(name, value))
}

/// Parse the two leading characters of a suffix such as `"90s"` or `"20th"`
pub fn parse_suffix_prefix(name: &str, suffix: &str) -> QueryResult<i32> {
    let prefix: String = suffix.chars().take(2).collect();
    if prefix.chars().count() < 2 {
        return Err(QueryError::invalid_parameter(name, suffix));
    }

    prefix
        .parse()
        .map_err(|_| QueryError::invalid_parameter(name, suffix))
}

/// Build the stored `"LastName, FirstName"` key from split name parts
pub fn person_key(first_name: &str, second_name: &str) -> String {
    format!("{}, {}", second_name, first_name)
}

/// Fetch a required query-string parameter
pub fn required<'a>(params: &'a HashMap<String, String>, name: &str) -> QueryResult<&'a str> {
    params
        .get(name)
        .map(String::as_str)
        .ok_or_else(|| QueryError::MissingParameter(name.to_string()))
}
