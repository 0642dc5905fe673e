//! HAL representations
//!
//! `GET /api/films/{id}` and `GET /api/films/allFilms` wrap films with
//! hypermedia links. All hrefs are relative to the server root.

use serde::Serialize;

use crate::catalog::{Film, ALL_FILMS_PATH};

/// A single hypermedia link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub films: Link,
}

/// A film followed by its `_links`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmResource {
    #[serde(flatten)]
    pub film: Film,

    #[serde(rename = "_links")]
    pub links: FilmLinks,
}

impl From<Film> for FilmResource {
    fn from(film: Film) -> Self {
        let links = FilmLinks {
            self_link: Link::new(film.resource_path()),
            films: Link::new(ALL_FILMS_PATH),
        };
        Self { film, links }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedFilms {
    #[serde(rename = "filmList")]
    pub film_list: Vec<FilmResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
}

/// The full catalog as a HAL collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmCollection {
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedFilms,

    #[serde(rename = "_links")]
    pub links: CollectionLinks,
}

impl From<Vec<Film>> for FilmCollection {
    fn from(films: Vec<Film>) -> Self {
        Self {
            embedded: EmbeddedFilms {
                film_list: films.into_iter().map(FilmResource::from).collect(),
            },
            links: CollectionLinks {
                self_link: Link::new(ALL_FILMS_PATH),
            },
        }
    }
}
