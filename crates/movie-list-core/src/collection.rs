use movie_list_models::Movie;
use serde::{Deserialize, Serialize};

/// An ordered movie collection with no duplicate members.
///
/// Insertion order is preserved. Membership is decided by full-value
/// equality of `Movie`, so two records that share an id but differ in any
/// other field count as distinct members.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Collection {
    movies: Vec<Movie>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `movie` unless an equal member is already present.
    ///
    /// Returns true when the movie was inserted. Adding an existing member
    /// is a no-op, not an error.
    pub fn add(&mut self, movie: Movie) -> bool {
        if self.movies.contains(&movie) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    /// Remove the first member equal to `movie`.
    ///
    /// Returns true when a member was removed; removing an absent movie is
    /// a no-op.
    pub fn remove(&mut self, movie: &Movie) -> bool {
        match self.movies.iter().position(|m| m == movie) {
            Some(idx) => {
                self.movies.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, movie: &Movie) -> bool {
        self.movies.contains(movie)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            poster_path: format!("/{}.jpg", id),
            release_date: "2010-07-16".to_string(),
        }
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut c = Collection::new();
        assert!(c.add(movie(2, "Tenet")));
        assert!(c.add(movie(1, "Inception")));
        let titles: Vec<&str> = c.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Tenet", "Inception"]);
    }

    #[test]
    fn test_add_twice_keeps_single_member() {
        let mut c = Collection::new();
        let m = movie(1, "Inception");
        assert!(c.add(m.clone()));
        assert!(!c.add(m.clone()));
        assert_eq!(c.iter().filter(|x| **x == m).count(), 1);
    }

    #[test]
    fn test_same_id_different_fields_are_distinct_members() {
        let mut c = Collection::new();
        let mut other = movie(1, "Inception");
        other.release_date = "2010-07-17".to_string();
        assert!(c.add(movie(1, "Inception")));
        assert!(c.add(other));
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut c = Collection::new();
        let m = movie(1, "Inception");
        c.add(m.clone());
        assert!(c.remove(&m));
        assert!(!c.remove(&m));
        assert!(c.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut c = Collection::new();
        c.add(movie(1, "Inception"));
        assert!(!c.remove(&movie(2, "Tenet")));
        assert_eq!(c.len(), 1);
    }
}
