//! # Postboard Core
//!
//! The domain layer of the Postboard API.
//! This crate contains the post gateway and the ports it talks to, with zero
//! infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::RepoError;
pub use service::{PostService, ServiceConfig};
