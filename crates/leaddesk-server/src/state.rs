//! Application state: the immutable lead snapshot plus CORS configuration.
//!
//! The lead collection is loaded once at startup and never mutated, so
//! [`AppState`] shares it as a plain `Arc<Vec<Lead>>` with no locking.
//! Concurrent requests read the same snapshot and each derives a fresh page.

use std::sync::Arc;

use axum::http::HeaderValue;
use leaddesk_core::{seed, Lead};

/// Origin allowed by the CORS policy when `LEADDESK_ALLOWED_ORIGIN` is unset.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://dynamic-paprenjak-db3280.netlify.app";

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The immutable lead snapshot.
    pub leads: Arc<Vec<Lead>>,
    /// The single origin granted by `Access-Control-Allow-Origin`.
    pub allowed_origin: HeaderValue,
}

impl AppState {
    /// Creates state over an already-loaded lead collection.
    pub fn new(leads: Vec<Lead>, allowed_origin: HeaderValue) -> Self {
        AppState {
            leads: Arc::new(leads),
            allowed_origin,
        }
    }

    /// Creates state over the built-in seed with the default origin
    /// (for testing).
    pub fn seeded() -> Self {
        AppState::new(
            seed::builtin(),
            HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN),
        )
    }
}
