//! filmdb - REST query service over a fixed film catalog
//!
//! The catalog is loaded once into an in-memory store; the query engine
//! filters, projects, deduplicates and sorts it; the HTTP server exposes
//! each engine operation under `/api/films`.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
