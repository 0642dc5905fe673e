//! Observability for filmdb
//!
//! - Structured logging (one JSON object per line)
//! - Typed lifecycle and request events
//! - Shared request counters
//!
//! Observability never changes query results and never fails a request.
//!
//! ```ignore
//! use filmdb::observability::{log_event_with_fields, Event, Logger};
//!
//! log_event_with_fields(Event::CatalogLoaded, &[("films", "42")]);
//! Logger::warn("REQUEST_REJECTED", &[("path", "/api/films/abc")]);
//! ```

mod events;
mod logger;
mod metrics;
mod timer;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use timer::Timer;

fn severity_for(event: Event) -> Severity {
    match event {
        e if e.is_fatal() => Severity::Fatal,
        Event::RequestRejected | Event::FilmDeleteNoop => Severity::Warn,
        Event::RequestFailed => Severity::Error,
        _ => Severity::Info,
    }
}

/// Log a lifecycle event
pub fn log_event(event: Event) {
    log_event_with_fields(event, &[]);
}

/// Log an event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_severities() {
        assert_eq!(severity_for(Event::CatalogFailed), Severity::Fatal);
        assert_eq!(severity_for(Event::RequestRejected), Severity::Warn);
        assert_eq!(severity_for(Event::RequestFailed), Severity::Error);
        assert_eq!(severity_for(Event::RequestComplete), Severity::Info);
    }

    #[test]
    fn test_log_event() {
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("catalog_path", "/tmp/films.json")]);
    }
}
