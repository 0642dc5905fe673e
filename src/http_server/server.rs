//! # HTTP Server
//!
//! Combines the film, health and observability routers behind CORS and the
//! request logging middleware.

use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::catalog::{RecordStore, FILMS_BASE_PATH};
use crate::observability::{log_event, log_event_with_fields, Event, MetricsRegistry};

use super::config::HttpServerConfig;
use super::film_routes::{film_routes, FilmsState};
use super::request_log::track_requests;
use super::observability_routes::{health_routes, observability_routes};

/// HTTP server for the film API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given film state
    pub fn with_config<S: RecordStore + 'static>(
        config: HttpServerConfig,
        state: Arc<FilmsState<S>>,
    ) -> Self {
        let router = Self::build_router(&config, state);
        Self { config, router }
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.is_permissive_cors() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    fn build_router<S: RecordStore + 'static>(
        config: &HttpServerConfig,
        state: Arc<FilmsState<S>>,
    ) -> Router {
        let metrics = Arc::clone(&state.metrics);

        Router::new()
            .merge(health_routes())
            .nest("/observability", observability_routes(Arc::clone(&metrics)))
            .nest(FILMS_BASE_PATH, film_routes(state))
            .layer(middleware::from_fn_with_state(metrics, track_requests))
            .layer(Self::cors_layer(config))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self
            .config
            .bind_addr()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::Serving, &[("addr", &addr.to_string())]);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

async fn shutdown_signal() {
    // A failed handler install leaves the server running until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Convenience for tests and embedding: shared counters seeded with the
/// current film count
pub fn metrics_for<S: RecordStore>(store: &S) -> Arc<MetricsRegistry> {
    let metrics = Arc::new(MetricsRegistry::new());
    if let Ok(count) = store.len() {
        metrics.set_films(count as u64);
    }
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryStore;
    use crate::query::QueryEngine;

    fn state() -> Arc<FilmsState<InMemoryStore>> {
        let store = Arc::new(InMemoryStore::new(Vec::new()));
        let metrics = metrics_for(store.as_ref());
        Arc::new(FilmsState::new(QueryEngine::new(store), metrics))
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::with_config(HttpServerConfig::default(), state());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9000);
        let server = HttpServer::with_config(config, state());
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds_with_origin_list() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::with_config(config, state()).router();
    }
}
