//! PostgreSQL storage via SeaORM.

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
mod error;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;

/// Configuration for the post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}
