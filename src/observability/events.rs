//! Observable events
//!
//! Every log line the service writes names one of these.

use std::fmt;

/// Observable events in filmdb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & lifecycle
    BootStart,
    BootComplete,
    ConfigLoaded,
    CatalogLoaded,
    /// Catalog could not be loaded (FATAL)
    CatalogFailed,
    Serving,
    ShutdownComplete,

    // Requests
    RequestComplete,
    /// Request answered with a client error
    RequestRejected,
    /// Request failed on the server side
    RequestFailed,

    // Data changes
    FilmDeleted,
    /// Delete for an id that was not present
    FilmDeleteNoop,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "FILMDB_STARTUP_BEGIN",
            Event::BootComplete => "FILMDB_STARTUP_COMPLETE",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::CatalogFailed => "CATALOG_FAILED",
            Event::Serving => "FILMDB_SERVING",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::RequestComplete => "REQUEST_COMPLETE",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
            Event::FilmDeleted => "FILM_DELETED",
            Event::FilmDeleteNoop => "FILM_DELETE_NOOP",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::CatalogFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_upper_snake_case() {
        let events = [
            Event::BootStart,
            Event::BootComplete,
            Event::ConfigLoaded,
            Event::CatalogLoaded,
            Event::CatalogFailed,
            Event::Serving,
            Event::ShutdownComplete,
            Event::RequestComplete,
            Event::RequestRejected,
            Event::RequestFailed,
            Event::FilmDeleted,
            Event::FilmDeleteNoop,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_only_catalog_failure_is_fatal() {
        assert!(Event::CatalogFailed.is_fatal());
        assert!(!Event::RequestFailed.is_fatal());
    }
}
