//! Data Transfer Objects for the non-GraphQL endpoints.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// `"memory"` or `"postgres"`.
    pub storage: String,
    pub timestamp: String,
}
