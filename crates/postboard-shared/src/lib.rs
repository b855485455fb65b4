//! # Postboard Shared
//!
//! Wire types for the plain-HTTP parts of the API (health, error bodies),
//! shared with clients.

pub mod dto;
pub mod response;

pub use dto::HealthResponse;
pub use response::ErrorResponse;
