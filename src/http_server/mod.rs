//! # filmdb HTTP Server Module
//!
//! axum server exposing the query engine.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/films/*` - Film queries and delete-by-id
//! - `/observability/*` - Health and request counters

pub mod config;
pub mod errors;
pub mod film_routes;
pub mod observability_routes;
pub mod representation;
mod request_log;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use film_routes::{film_routes, FilmsState};
pub use representation::{FilmCollection, FilmResource, Link};
pub use server::{metrics_for, HttpServer};
