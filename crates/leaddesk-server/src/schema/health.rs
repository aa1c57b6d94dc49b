//! Response type for the `/health` endpoint.

use serde::Serialize;

/// Liveness report: process status plus the size of the loaded snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub leads: usize,
}
