//! Error types shared by the ports and the gateway.

use thiserror::Error;

/// Repository-level errors.
///
/// `NotFound` is only produced by conditional writes (update/delete) that
/// matched no row. Lookups report absence as `Ok(None)`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepoError {
    /// Status code a mutation reports for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            RepoError::NotFound => 400,
            RepoError::Connection(_) | RepoError::Query(_) | RepoError::Constraint(_) => 500,
        }
    }
}
