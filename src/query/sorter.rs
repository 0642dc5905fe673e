//! Result sorting and duplicate removal
//!
//! One comparator for every operation, parameterised by the field to sort on.
//! Sorting is stable: equal keys keep their scan order.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use chrono::NaiveDate;

/// Fields results can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Length,
    Year,
    Name,
}

/// A comparable key extracted from a record.
///
/// Keys of different kinds order by kind first: text < number < date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Text(&'a str),
    Number(i64),
    Date(NaiveDate),
}

/// Records that expose sort keys by field
pub trait Sortable {
    /// Key for `field`, or `None` if the record has no such field
    fn sort_key(&self, field: SortField) -> Option<SortKey<'_>>;
}

/// Sorts result records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts ascending by `field`.
    ///
    /// Records without the field sort first.
    pub fn sort<T: Sortable>(records: &mut [T], field: SortField) {
        records.sort_by(|a, b| Self::compare(a.sort_key(field), b.sort_key(field)));
    }

    fn compare(a: Option<SortKey<'_>>, b: Option<SortKey<'_>>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(&b),
        }
    }

    /// Removes structurally equal duplicates, keeping the first occurrence of
    /// each in its original position.
    pub fn dedup<T>(records: Vec<T>) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = HashSet::with_capacity(records.len());
        records
            .into_iter()
            .filter(|record| seen.insert(record.clone()))
            .collect()
    }
}
