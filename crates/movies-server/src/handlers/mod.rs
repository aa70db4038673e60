//! HTTP handler modules for the movies API.
//!
//! Handlers are thin: they parse requests, acquire the store lock, delegate
//! to [`crate::store::MovieStore`], and return JSON responses. No business
//! logic lives here.

pub mod movies;
