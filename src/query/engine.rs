//! Query engine
//!
//! Every operation reads the current snapshot from the store, then runs the
//! same pipeline in strict order:
//!
//! 1. Scan (full or store-side equality lookup)
//! 2. Filter
//! 3. Project to the operation's record shape
//! 4. Deduplicate (person listings only)
//! 5. Stable sort
//!
//! Operations are synchronous and hold no state beyond the store handle.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::catalog::{Film, RecordStore, Role};

use super::bucket::YearBucket;
use super::errors::{QueryError, QueryResult};
use super::params::{parse_int, person_key};
use super::projection::{PersonName, TitleEntry, TitleIndexEntry, TitleLength, YearTitle};
use super::sorter::{ResultSorter, SortField};

/// Film query engine over an explicit store handle
pub struct QueryEngine<S: RecordStore> {
    store: Arc<S>,
}

impl<S: RecordStore> Clone for QueryEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: RecordStore> QueryEngine<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// All records in store order
    pub fn list_all(&self) -> QueryResult<Vec<Film>> {
        Ok(self.store.find_all()?)
    }

    /// `(id, title)` for every record, store order
    pub fn list_title_index(&self) -> QueryResult<Vec<TitleIndexEntry>> {
        Ok(self
            .store
            .find_all()?
            .iter()
            .map(TitleIndexEntry::from)
            .collect())
    }

    /// A single record by id
    pub fn get_by_id(&self, id: i64) -> QueryResult<Film> {
        self.store.find_by_id(id)?.ok_or(QueryError::NotFound(id))
    }

    /// Distinct credited names for a role, ascending.
    ///
    /// Uncredited (empty) entries are dropped before deduplication.
    pub fn list_person_names(&self, role: Role) -> QueryResult<Vec<PersonName>> {
        let names: Vec<PersonName> = self
            .store
            .find_all()?
            .iter()
            .map(|film| film.person(role))
            .filter(|name| !name.is_empty())
            .map(|name| PersonName {
                role,
                name: name.to_string(),
            })
            .collect();

        let mut names = ResultSorter::dedup(names);
        ResultSorter::sort(&mut names, SortField::Name);
        Ok(names)
    }

    /// Titles released on exactly `date`, ascending. Repeated titles are kept.
    pub fn list_titles_by_year(&self, date: NaiveDate) -> QueryResult<Vec<TitleEntry>> {
        let films = self.store.find_all_by_year(date)?;
        Ok(Self::sorted_titles(&films))
    }

    /// Titles credited to `secondName, firstName` in `role`, ascending
    pub fn list_titles_by_person(
        &self,
        role: Role,
        first_name: &str,
        second_name: &str,
    ) -> QueryResult<Vec<TitleEntry>> {
        let key = person_key(first_name, second_name);
        let films = match role {
            Role::Director => self.store.find_all_by_director(&key)?,
            Role::Actor => self.store.find_all_by_actor(&key)?,
            Role::Actress => self.store.find_all_by_actress(&key)?,
        };
        Ok(Self::sorted_titles(&films))
    }

    pub fn list_titles_by_director(
        &self,
        first_name: &str,
        second_name: &str,
    ) -> QueryResult<Vec<TitleEntry>> {
        self.list_titles_by_person(Role::Director, first_name, second_name)
    }

    pub fn list_titles_by_actor(
        &self,
        first_name: &str,
        second_name: &str,
    ) -> QueryResult<Vec<TitleEntry>> {
        self.list_titles_by_person(Role::Actor, first_name, second_name)
    }

    pub fn list_titles_by_actress(
        &self,
        first_name: &str,
        second_name: &str,
    ) -> QueryResult<Vec<TitleEntry>> {
        self.list_titles_by_person(Role::Actress, first_name, second_name)
    }

    /// Films strictly between `gt` and `lt` minutes, ascending by length.
    ///
    /// Both bounds are raw parameter strings and must parse as integers.
    pub fn list_by_length_range(&self, lt: &str, gt: &str) -> QueryResult<Vec<TitleLength>> {
        let lt = parse_int("lt", lt)?;
        let gt = parse_int("gt", gt)?;
        self.list_by_length_bounds(lt, gt)
    }

    /// Typed form of [`QueryEngine::list_by_length_range`]
    pub fn list_by_length_bounds(&self, lt: i32, gt: i32) -> QueryResult<Vec<TitleLength>> {
        let mut films: Vec<TitleLength> = self
            .store
            .find_all()?
            .iter()
            .filter(|film| gt < film.length && film.length < lt)
            .map(TitleLength::from)
            .collect();

        ResultSorter::sort(&mut films, SortField::Length);
        Ok(films)
    }

    /// Films of the decade named by `suffix` (e.g. `"90s"`), ascending by year
    pub fn list_by_decade(&self, suffix: &str) -> QueryResult<Vec<YearTitle>> {
        let bucket = YearBucket::decade(suffix)?;
        self.list_in_bucket(bucket)
    }

    /// Films of the century named by `suffix` (e.g. `"20th"`), ascending by year
    pub fn list_by_century(&self, suffix: &str) -> QueryResult<Vec<YearTitle>> {
        let bucket = YearBucket::century(suffix)?;
        self.list_in_bucket(bucket)
    }

    fn list_in_bucket(&self, bucket: YearBucket) -> QueryResult<Vec<YearTitle>> {
        let mut films: Vec<YearTitle> = self
            .store
            .find_all()?
            .iter()
            .filter(|film| bucket.contains(film.release_year()))
            .map(YearTitle::from)
            .collect();

        ResultSorter::sort(&mut films, SortField::Year);
        Ok(films)
    }

    /// Removes a film. A missing id is a no-op; the return value reports
    /// whether anything was removed.
    pub fn delete_by_id(&self, id: i64) -> QueryResult<bool> {
        Ok(self.store.delete_by_id(id)?)
    }

    /// Number of films currently in the store
    pub fn film_count(&self) -> QueryResult<usize> {
        Ok(self.store.len()?)
    }

    fn sorted_titles(films: &[Film]) -> Vec<TitleEntry> {
        let mut titles: Vec<TitleEntry> = films.iter().map(TitleEntry::from).collect();
        ResultSorter::sort(&mut titles, SortField::Title);
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryStore;

    fn film(id: i64, title: &str, year: &str, length: i32) -> Film {
        Film {
            id,
            title: title.to_string(),
            year: year.parse().unwrap(),
            length,
            subject: String::new(),
            actor: String::new(),
            actress: String::new(),
            director: String::new(),
            popularity: None,
            awards: String::new(),
        }
    }

    fn engine(films: Vec<Film>) -> QueryEngine<InMemoryStore> {
        QueryEngine::new(Arc::new(InMemoryStore::new(films)))
    }

    #[test]
    fn test_titles_by_director_sorted() {
        let mut b = film(1, "B", "1980-01-01", 90);
        b.director = "Allen, Woody".to_string();
        let mut a = film(2, "A", "1981-01-01", 90);
        a.director = "Allen, Woody".to_string();

        let titles = engine(vec![b, a])
            .list_titles_by_director("Woody", "Allen")
            .unwrap();

        let titles: Vec<&str> = titles.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_length_range_is_strict() {
        let films = [30, 50, 89, 90, 120]
            .iter()
            .enumerate()
            .map(|(i, len)| film(i as i64, &format!("F{}", len), "2000-01-01", *len))
            .collect();

        let result = engine(films).list_by_length_range("90", "45").unwrap();

        let lengths: Vec<i32> = result.iter().map(|r| r.length).collect();
        assert_eq!(lengths, vec![50, 89]);
    }

    #[test]
    fn test_length_range_invalid_bound() {
        let result = engine(vec![]).list_by_length_range("ninety", "45");
        assert_eq!(result, Err(QueryError::invalid_parameter("lt", "ninety")));

        let result = engine(vec![]).list_by_length_range("90", "4.5");
        assert_eq!(result, Err(QueryError::invalid_parameter("gt", "4.5")));
    }

    #[test]
    fn test_person_names_drop_empty_and_dedup() {
        let mut a = film(1, "A", "1990-01-01", 90);
        a.actor = "Pacino, Al".to_string();
        let b = film(2, "B", "1990-01-01", 90);
        let mut c = film(3, "C", "1990-01-01", 90);
        c.actor = "De Niro, Robert".to_string();
        let mut d = film(4, "D", "1990-01-01", 90);
        d.actor = "Pacino, Al".to_string();

        let names = engine(vec![a, b, c, d])
            .list_person_names(Role::Actor)
            .unwrap();

        let names: Vec<&str> = names.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["De Niro, Robert", "Pacino, Al"]);
    }

    #[test]
    fn test_decade_sorted_by_year() {
        let films = vec![
            film(1, "Late", "1998-06-01", 90),
            film(2, "Outside", "2001-01-01", 90),
            film(3, "Early", "1991-03-01", 90),
            film(4, "Edge", "1990-01-01", 90),
        ];

        let result = engine(films).list_by_decade("90s").unwrap();

        let titles: Vec<&str> = result.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Edge", "Early", "Late"]);
    }

    #[test]
    fn test_get_by_id_not_found() {
        let engine = engine(vec![film(1, "A", "1990-01-01", 90)]);
        assert_eq!(engine.get_by_id(1).unwrap().title, "A");
        assert_eq!(engine.get_by_id(2), Err(QueryError::NotFound(2)));
    }

    #[test]
    fn test_delete_then_get() {
        let engine = engine(vec![film(1, "A", "1990-01-01", 90)]);

        assert!(engine.delete_by_id(1).unwrap());
        assert_eq!(engine.get_by_id(1), Err(QueryError::NotFound(1)));
        assert!(!engine.delete_by_id(1).unwrap());
    }
}
