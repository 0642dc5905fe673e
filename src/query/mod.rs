//! Film query subsystem
//!
//! The engine consumes a store snapshot and produces ordered, typed
//! projections.
//!
//! # Execution Flow (strict order)
//!
//! 1. Parse raw parameters (ids, integers, dates, suffixes)
//! 2. Scan the store
//! 3. Filter by the operation's predicate
//! 4. Project to the operation's record shape
//! 5. Deduplicate where the operation lists distinct values
//! 6. Stable sort by the operation's field
//!
//! Empty results are valid; only malformed parameters, unknown ids and store
//! failures are errors.

mod bucket;
mod engine;
mod errors;
pub mod params;
mod projection;
mod request;
mod sorter;

pub use bucket::YearBucket;
pub use engine::QueryEngine;
pub use errors::{QueryError, QueryResult};
pub use projection::{PersonName, TitleEntry, TitleIndexEntry, TitleLength, YearTitle};
pub use request::FilmQuery;
pub use sorter::{ResultSorter, SortField, SortKey, Sortable};
