//! HTTP handler modules for the leaddesk API.
//!
//! Handlers are thin: decode the request, consult the authorization
//! placeholder, delegate to `leaddesk_core::query`, and return JSON.
//! No filtering or pagination logic lives here.

pub mod health;
pub mod leads;
