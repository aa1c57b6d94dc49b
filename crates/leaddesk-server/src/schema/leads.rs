//! Response types for the `/api/leads` endpoint.

use leaddesk_core::{Lead, PageMeta};
use serde::Serialize;

/// The `/api/leads` response body: one page of leads plus pagination
/// metadata.
#[derive(Debug, Clone, Serialize)]
pub struct LeadsResponse {
    pub leads: Vec<Lead>,
    pub meta: PageMeta,
}
