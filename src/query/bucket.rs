//! Year buckets
//!
//! Half-open `[lower, upper)` year ranges derived from decade and century
//! suffixes.

use super::errors::QueryResult;
use super::params::parse_suffix_prefix;

/// A half-open range of calendar years
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearBucket {
    pub lower: i32,
    pub upper: i32,
}

impl YearBucket {
    /// Decade of the twentieth century named by a suffix such as `"90s"`.
    ///
    /// Only the first two characters are read: `"90s"` → `[1990, 2000)`.
    pub fn decade(suffix: &str) -> QueryResult<Self> {
        let fragment = parse_suffix_prefix("suffix", suffix)?;
        let lower = 1900 + fragment;
        Ok(Self {
            lower,
            upper: lower + 10,
        })
    }

    /// Century named by an ordinal suffix such as `"20th"` → `[1900, 2000)`
    pub fn century(suffix: &str) -> QueryResult<Self> {
        let century = parse_suffix_prefix("suffix", suffix)?;
        let lower = (century - 1) * 100;
        Ok(Self {
            lower,
            upper: lower + 100,
        })
    }

    pub fn contains(&self, year: i32) -> bool {
        self.lower <= year && year < self.upper
    }
}
