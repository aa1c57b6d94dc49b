//! Domain model and query logic for the leaddesk lead-management API.
//!
//! The collection of leads is an immutable snapshot loaded once at process
//! start; [`query::query`] is a pure filter/paginate pass over it. This crate
//! has no async and no HTTP -- the server crate is a thin adapter around it.

pub mod lead;
pub mod query;
pub mod seed;

// Re-export commonly used types
pub use lead::{Lead, Tab};
pub use query::{LeadPage, LeadQuery, PageMeta, RawLeadQuery};
pub use seed::SeedError;
