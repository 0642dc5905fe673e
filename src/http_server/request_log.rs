//! Request logging middleware
//!
//! Logs one line per request and updates the shared counters. Client errors
//! are logged as REQUEST_REJECTED with the error kind, server errors as
//! REQUEST_FAILED.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry, Timer};
use crate::query::QueryError;

pub async fn track_requests(
    State(metrics): State<Arc<MetricsRegistry>>,
    request: Request,
    next: Next,
) -> Response {
    let timer = Timer::new();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    let status_text = status.as_u16().to_string();
    let elapsed = timer.elapsed_ms();
    let kind = response
        .extensions()
        .get::<QueryError>()
        .map(QueryError::code)
        .unwrap_or("");

    let mut fields = vec![
        ("method", method.as_str()),
        ("path", path.as_str()),
        ("status", status_text.as_str()),
        ("elapsed_ms", elapsed.as_str()),
    ];
    if !kind.is_empty() {
        fields.push(("kind", kind));
    }

    if status.is_server_error() {
        metrics.increment_failed();
        log_event_with_fields(Event::RequestFailed, &fields);
    } else if status.is_client_error() {
        metrics.increment_rejected();
        match response.extensions().get::<QueryError>() {
            Some(QueryError::InvalidParameter { .. }) | Some(QueryError::MissingParameter(_)) => {
                metrics.increment_invalid_parameters()
            }
            Some(QueryError::NotFound(_)) => metrics.increment_not_found(),
            // Unmatched routes carry no query error
            _ if status.as_u16() == 404 => metrics.increment_not_found(),
            _ => {}
        }
        log_event_with_fields(Event::RequestRejected, &fields);
    } else {
        metrics.increment_served();
        log_event_with_fields(Event::RequestComplete, &fields);
    }

    response
}
