//! Movie catalog request/response types.
//!
//! The wire shape of a movie is
//! `{"id", "isbn", "title", "director": {"firstName", "lastName"} | null}`.
//! A movie without a director serializes `director` as JSON `null` rather
//! than omitting the field.

use serde::{Deserialize, Serialize};

/// A movie record as stored and as returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Server-assigned identifier, unique within the collection.
    pub id: String,
    /// Opaque ISBN string; no format or uniqueness enforcement.
    pub isbn: String,
    /// Movie title.
    pub title: String,
    /// The movie's director, if any.
    pub director: Option<Director>,
}

/// A director, owned by exactly one movie. No independent identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Director {
    /// Director's first name.
    pub first_name: String,
    /// Director's last name.
    pub last_name: String,
}

/// Write payload for `POST /movies` and `PUT /movies/{id}`.
///
/// Every field is lenient: an empty body object decodes to a zero-valued
/// movie. An `id` field in the payload is ignored; the server always
/// assigns (create) or forces (update) the identifier itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviePayload {
    /// ISBN for the new record. Defaults to empty.
    #[serde(default)]
    pub isbn: String,
    /// Title for the new record. Defaults to empty.
    #[serde(default)]
    pub title: String,
    /// Director for the new record. Defaults to none.
    #[serde(default)]
    pub director: Option<Director>,
}

impl MoviePayload {
    /// Materializes the payload into a [`Movie`] with the given id.
    pub fn into_movie(self, id: String) -> Movie {
        Movie {
            id,
            isbn: self.isbn,
            title: self.title,
            director: self.director,
        }
    }
}
