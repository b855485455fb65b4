//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL post storage via SeaORM
//! - `auth` - JWT bearer tokens

pub mod database;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::DatabaseConfig;
pub use memory::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
