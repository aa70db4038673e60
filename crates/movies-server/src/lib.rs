//! HTTP/JSON API server for an in-memory movie catalog.
//!
//! Exposes CRUD endpoints over a single seeded collection of movies. This
//! crate contains the server framework, API schema types, the in-memory
//! store, error handling, and route definitions.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
pub mod store;
