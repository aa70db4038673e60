//! Movie catalog handlers (list, get, create, update, delete).

use axum::extract::{Path, State};
use axum::Json;

use crate::error::{ApiError, AppJson};
use crate::schema::movies::{Movie, MoviePayload};
use crate::state::AppState;

/// Lists all movies in collection order.
///
/// `GET /movies`
pub async fn list_movies(State(state): State<AppState>) -> Json<Vec<Movie>> {
    let store = state.store.read().await;
    Json(store.list())
}

/// Fetches a single movie by id.
///
/// `GET /movies/{id}`
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    let store = state.store.read().await;
    let movie = store.get(&id).ok_or_else(|| ApiError::movie_not_found(&id))?;
    Ok(Json(movie))
}

/// Creates a movie with a server-assigned id.
///
/// `POST /movies`
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(payload): AppJson<MoviePayload>,
) -> Json<Movie> {
    let mut store = state.store.write().await;
    Json(store.create(payload))
}

/// Replaces a movie wholesale, keeping its id.
///
/// `PUT /movies/{id}`
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<MoviePayload>,
) -> Result<Json<Movie>, ApiError> {
    let mut store = state.store.write().await;
    let movie = store
        .update(&id, payload)
        .ok_or_else(|| ApiError::movie_not_found(&id))?;
    Ok(Json(movie))
}

/// Deletes a movie by id and returns the remaining collection.
///
/// `DELETE /movies/{id}`. A miss is a no-op; the response is always the
/// current collection.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Vec<Movie>> {
    let mut store = state.store.write().await;
    Json(store.delete(&id))
}
