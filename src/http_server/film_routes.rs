//! Film HTTP Routes
//!
//! Read endpoints and delete-by-id over the film catalog, mounted under
//! `/api/films`. Path and query values arrive as raw strings and are parsed
//! by `query::params`, so every malformed value yields the same 400 body.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::catalog::{RecordStore, Role};
use crate::observability::{log_event_with_fields, Event, MetricsRegistry};
use crate::query::params::{parse_date, parse_id, required};
use crate::query::{
    PersonName, QueryEngine, TitleEntry, TitleIndexEntry, TitleLength, YearTitle,
};

use super::errors::ApiResult;
use super::representation::{FilmCollection, FilmResource};

// ==================
// Shared State
// ==================

/// State shared across film handlers
pub struct FilmsState<S: RecordStore> {
    pub engine: QueryEngine<S>,
    pub metrics: Arc<MetricsRegistry>,
}

impl<S: RecordStore> FilmsState<S> {
    pub fn new(engine: QueryEngine<S>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { engine, metrics }
    }
}

type FilmsRouteState<S> = State<Arc<FilmsState<S>>>;
type Params = Query<HashMap<String, String>>;

// ==================
// Router
// ==================

/// Create film routes
pub fn film_routes<S: RecordStore + 'static>(state: Arc<FilmsState<S>>) -> Router {
    Router::new()
        .route("/allFilms", get(all_films_handler::<S>))
        .route("/titles", get(titles_handler::<S>))
        .route("/actors", get(actors_handler::<S>))
        .route("/actresses", get(actresses_handler::<S>))
        .route("/directors", get(directors_handler::<S>))
        .route("/date/:year", get(titles_by_date_handler::<S>))
        .route("/director", get(titles_by_director_handler::<S>))
        .route("/actor", get(titles_by_actor_handler::<S>))
        .route("/actress", get(titles_by_actress_handler::<S>))
        .route("/length", get(length_range_handler::<S>))
        .route("/decade", get(decade_handler::<S>))
        .route("/century", get(century_handler::<S>))
        .route(
            "/:id",
            get(get_film_handler::<S>).delete(delete_film_handler::<S>),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn all_films_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
) -> ApiResult<Json<FilmCollection>> {
    let films = state.engine.list_all()?;
    Ok(Json(FilmCollection::from(films)))
}

async fn titles_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
) -> ApiResult<Json<Vec<TitleIndexEntry>>> {
    Ok(Json(state.engine.list_title_index()?))
}

async fn get_film_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Path(id): Path<String>,
) -> ApiResult<Json<FilmResource>> {
    let id = parse_id(&id)?;
    let film = state.engine.get_by_id(id)?;
    Ok(Json(FilmResource::from(film)))
}

async fn delete_film_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let removed = state.engine.delete_by_id(id)?;
    let id = id.to_string();

    if removed {
        state.metrics.increment_deleted();
        // The delete has already happened
        if let Ok(count) = state.engine.film_count() {
            state.metrics.set_films(count as u64);
        }
        log_event_with_fields(Event::FilmDeleted, &[("id", &id)]);
    } else {
        log_event_with_fields(Event::FilmDeleteNoop, &[("id", &id)]);
    }

    Ok(StatusCode::NO_CONTENT)
}

async fn actors_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
) -> ApiResult<Json<Vec<PersonName>>> {
    Ok(Json(state.engine.list_person_names(Role::Actor)?))
}

async fn actresses_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
) -> ApiResult<Json<Vec<PersonName>>> {
    Ok(Json(state.engine.list_person_names(Role::Actress)?))
}

async fn directors_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
) -> ApiResult<Json<Vec<PersonName>>> {
    Ok(Json(state.engine.list_person_names(Role::Director)?))
}

async fn titles_by_date_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Path(year): Path<String>,
) -> ApiResult<Json<Vec<TitleEntry>>> {
    let date = parse_date("year", &year)?;
    Ok(Json(state.engine.list_titles_by_year(date)?))
}

fn titles_by_person<S: RecordStore>(
    engine: &QueryEngine<S>,
    role: Role,
    params: &HashMap<String, String>,
) -> ApiResult<Json<Vec<TitleEntry>>> {
    let first_name = required(params, "firstName")?;
    let second_name = required(params, "secondName")?;
    Ok(Json(engine.list_titles_by_person(
        role,
        first_name,
        second_name,
    )?))
}

async fn titles_by_director_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Query(params): Params,
) -> ApiResult<Json<Vec<TitleEntry>>> {
    titles_by_person(&state.engine, Role::Director, &params)
}

async fn titles_by_actor_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Query(params): Params,
) -> ApiResult<Json<Vec<TitleEntry>>> {
    titles_by_person(&state.engine, Role::Actor, &params)
}

async fn titles_by_actress_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Query(params): Params,
) -> ApiResult<Json<Vec<TitleEntry>>> {
    titles_by_person(&state.engine, Role::Actress, &params)
}

async fn length_range_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Query(params): Params,
) -> ApiResult<Json<Vec<TitleLength>>> {
    let lt = required(&params, "lt")?;
    let gt = required(&params, "gt")?;
    Ok(Json(state.engine.list_by_length_range(lt, gt)?))
}

async fn decade_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Query(params): Params,
) -> ApiResult<Json<Vec<YearTitle>>> {
    let suffix = required(&params, "suffix")?;
    Ok(Json(state.engine.list_by_decade(suffix)?))
}

async fn century_handler<S: RecordStore + 'static>(
    State(state): FilmsRouteState<S>,
    Query(params): Params,
) -> ApiResult<Json<Vec<YearTitle>>> {
    let suffix = required(&params, "suffix")?;
    Ok(Json(state.engine.list_by_century(suffix)?))
}
