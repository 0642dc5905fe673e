//! CLI command implementations
//!
//! Every command boots the same way: load config, set the log level, load
//! the catalog into an in-memory store. Only then does it do its own work.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use serde_json::json;

use crate::catalog::{CatalogLoader, InMemoryStore};
use crate::http_server::{metrics_for, FilmsState, HttpServer};
use crate::observability::{log_event, log_event_with_fields, Event, Logger};
use crate::query::{FilmQuery, QueryEngine};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_request_from, write_error_to, write_response_to};

/// Main CLI entry point
///
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config, port } => serve(&config, port),
        Command::Query { config } => query(&config),
        Command::Check { config } => check(&config),
    }
}

/// Load the catalog and serve the HTTP API until interrupted
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let (mut config, store) = boot(config_path)?;
    if let Some(port) = port {
        config.override_port(port)?;
    }

    let metrics = metrics_for(store.as_ref());
    let state = Arc::new(FilmsState::new(QueryEngine::new(store), metrics));
    let server = HttpServer::with_config(config.http.clone(), state);
    log_event_with_fields(Event::BootComplete, &[("addr", &server.socket_addr())]);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Run one request read from stdin and print the result to stdout
pub fn query(config_path: &Path) -> CliResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    query_with(config_path, &mut input, &mut output)
}

/// [`query`] over explicit streams
///
/// Malformed requests and failed queries are reported as an error response
/// on `output`; only config, catalog and I/O failures return `Err`.
pub fn query_with<R: BufRead, W: Write>(
    config_path: &Path,
    input: &mut R,
    output: &mut W,
) -> CliResult<()> {
    let (_config, store) = boot(config_path)?;
    let engine = QueryEngine::new(store);

    let request = read_request_from(input)?;
    let result = FilmQuery::from_json(request).and_then(|query| {
        Logger::trace("QUERY_RECEIVED", &[("op", query.op())]);
        engine.execute(&query)
    });

    match result {
        Ok(data) => write_response_to(output, data),
        Err(err) => write_error_to(output, err.code(), &err.to_string()),
    }
}

/// Validate config and catalog, printing the film count
pub fn check(config_path: &Path) -> CliResult<()> {
    check_with(config_path, &mut io::stdout())
}

pub fn check_with<W: Write>(config_path: &Path, output: &mut W) -> CliResult<()> {
    let (config, store) = boot(config_path)?;
    let engine = QueryEngine::new(store);

    let films = engine.film_count()?;
    write_response_to(
        output,
        json!({
            "catalog_path": config.catalog_file().to_string_lossy(),
            "films": films,
        }),
    )
}

fn boot(config_path: &Path) -> CliResult<(Config, Arc<InMemoryStore>)> {
    log_event(Event::BootStart);

    let config = Config::load(config_path)?;
    Logger::set_level(config.severity()?);
    let catalog_file = config.catalog_file();
    let catalog_display = catalog_file.to_string_lossy().into_owned();
    log_event_with_fields(Event::ConfigLoaded, &[("catalog_path", &catalog_display)]);

    let films = match CatalogLoader::load(&catalog_file) {
        Ok(films) => films,
        Err(e) => {
            log_event_with_fields(
                Event::CatalogFailed,
                &[("catalog_path", &catalog_display), ("reason", &e.to_string())],
            );
            return Err(e.into());
        }
    };

    let count = films.len().to_string();
    log_event_with_fields(Event::CatalogLoaded, &[("films", &count)]);

    Ok((config, Arc::new(InMemoryStore::new(films))))
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    const CATALOG: &str = r#"[
        {"id": 1, "title": "Manhattan", "year": "1979-04-25", "length": 96, "director": "Allen, Woody"},
        {"id": 2, "title": "Annie Hall", "year": "1977-04-20", "length": 93, "director": "Allen, Woody"}
    ]"#;

    fn setup(catalog: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("films.json"), catalog).unwrap();
        let config_path = dir.path().join("filmdb.json");
        fs::write(&config_path, json!({ "catalog_path": "films.json" }).to_string()).unwrap();
        (dir, config_path)
    }

    fn run_query(config_path: &Path, request: &str) -> serde_json::Value {
        let mut input = Cursor::new(format!("{}\n", request));
        let mut output = Vec::new();
        query_with(config_path, &mut input, &mut output).unwrap();
        serde_json::from_slice(&output).unwrap()
    }

    #[test]
    fn test_query_director() {
        let (_dir, config) = setup(CATALOG);

        let response = run_query(
            &config,
            r#"{"op":"director","firstName":"Woody","secondName":"Allen"}"#,
        );

        assert_eq!(response["status"], "ok");
        assert_eq!(
            response["data"],
            json!([{"title": "Annie Hall"}, {"title": "Manhattan"}])
        );
    }

    #[test]
    fn test_query_not_found_is_error_response() {
        let (_dir, config) = setup(CATALOG);

        let response = run_query(&config, r#"{"op":"film","id":99}"#);

        assert_eq!(response["status"], "error");
        assert_eq!(response["code"], "FILMS_NOT_FOUND");
    }

    #[test]
    fn test_query_unknown_op() {
        let (_dir, config) = setup(CATALOG);

        let response = run_query(&config, r#"{"op":"producers"}"#);
        assert_eq!(response["code"], "FILMS_INVALID_PARAMETER");
    }

    #[test]
    fn test_query_missing_field() {
        let (_dir, config) = setup(CATALOG);

        let response = run_query(&config, r#"{"op":"director","secondName":"Allen"}"#);
        assert_eq!(response["status"], "error");
        assert_eq!(response["code"], "FILMS_MISSING_PARAMETER");
    }

    #[test]
    fn test_serve_rejects_zero_port() {
        let (_dir, config) = setup(CATALOG);

        let err = serve(&config, Some(0)).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_check_reports_count() {
        let (_dir, config) = setup(CATALOG);

        let mut output = Vec::new();
        check_with(&config, &mut output).unwrap();

        let response: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(response["data"]["films"], 2);
    }

    #[test]
    fn test_check_rejects_duplicate_ids() {
        let (_dir, config) = setup(
            r#"[{"id": 1, "title": "A", "year": "2000-01-01"},
                {"id": 1, "title": "B", "year": "2001-01-01"}]"#,
        );

        let err = check_with(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::CatalogError);
    }

    #[test]
    fn test_missing_catalog_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("filmdb.json");
        fs::write(&config, json!({ "catalog_path": "nowhere.json" }).to_string()).unwrap();

        let err = check_with(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::CatalogError);
    }
}
