//! HTTP/JSON adapter for the leaddesk lead-management API.
//!
//! A thin axum layer over [`leaddesk_core`]: the single read-only
//! `/api/leads` endpoint decodes query parameters, runs the pure
//! filter/paginate pass over the immutable lead snapshot, and returns the
//! page with its metadata. This crate contains the router, application
//! state, schema types, error mapping, and the CORS/preflight policy.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
