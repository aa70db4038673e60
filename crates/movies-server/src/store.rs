//! MovieStore: the in-memory movie collection and its id counter.
//!
//! All business logic flows through [`MovieStore`]. Handlers are thin
//! wrappers that acquire the state lock and delegate to these methods.
//!
//! The store is the sole storage for all data; everything is lost when the
//! process exits. Identifiers come from a monotonic counter owned by the
//! store, so they are unique for the store's lifetime with no collision
//! check needed.

use crate::schema::movies::{Director, Movie, MoviePayload};

/// First id handed out by a seeded store, above both seeded ids.
const FIRST_GENERATED_ID: u64 = 13;

/// The in-memory movie collection.
///
/// Mutations preserve list order except for [`MovieStore::update`], which
/// moves the updated record to the end of the list (remove then append).
#[derive(Debug)]
pub struct MovieStore {
    movies: Vec<Movie>,
    next_id: u64,
}

impl MovieStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MovieStore {
            movies: Vec::new(),
            next_id: FIRST_GENERATED_ID,
        }
    }

    /// Creates a store pre-populated with the two fixed sample records
    /// (ids "1" and "12").
    pub fn seeded() -> Self {
        let mut store = MovieStore::new();
        store.movies.push(Movie {
            id: "1".to_string(),
            isbn: "43827".to_string(),
            title: "Movie One".to_string(),
            director: Some(Director {
                first_name: "John".to_string(),
                last_name: "Brooks".to_string(),
            }),
        });
        store.movies.push(Movie {
            id: "12".to_string(),
            isbn: "53827".to_string(),
            title: "Movie Two".to_string(),
            director: Some(Director {
                first_name: "James".to_string(),
                last_name: "Hardy".to_string(),
            }),
        });
        store
    }

    /// Returns all movies in list order.
    pub fn list(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    /// Returns the first movie whose id matches, if any.
    pub fn get(&self, id: &str) -> Option<Movie> {
        self.movies.iter().find(|m| m.id == id).cloned()
    }

    /// Appends a new movie with a freshly assigned id and returns it.
    pub fn create(&mut self, payload: MoviePayload) -> Movie {
        let id = self.next_id.to_string();
        self.next_id += 1;
        let movie = payload.into_movie(id);
        tracing::debug!(id = %movie.id, title = %movie.title, "created movie");
        self.movies.push(movie.clone());
        movie
    }

    /// Replaces the first movie whose id matches.
    ///
    /// The old record is removed and the replacement is appended at the end
    /// of the list with its id forced to `id`; the original list position is
    /// not preserved. Returns `None` without mutating if no record matches.
    pub fn update(&mut self, id: &str, payload: MoviePayload) -> Option<Movie> {
        let index = self.movies.iter().position(|m| m.id == id)?;
        self.movies.remove(index);
        let movie = payload.into_movie(id.to_string());
        tracing::debug!(id = %movie.id, title = %movie.title, "updated movie");
        self.movies.push(movie.clone());
        Some(movie)
    }

    /// Removes the first movie whose id matches and returns the remaining
    /// collection. A miss is a no-op, so repeated deletes are idempotent.
    pub fn delete(&mut self, id: &str) -> Vec<Movie> {
        if let Some(index) = self.movies.iter().position(|m| m.id == id) {
            self.movies.remove(index);
            tracing::debug!(id, "deleted movie");
        }
        self.movies.clone()
    }
}
