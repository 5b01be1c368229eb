//! # Ticklist Shared Library
//!
//! This crate contains the data model, persistence layer, and business
//! services shared between the Ticklist API server and its tooling.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `db`: Connection pool and migration runner
//! - `auth`: Password hashing and the authenticated-user capability
//! - `service`: Business rules for tasks and users
//! - `error`: Domain error taxonomy

pub mod auth;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

/// Current version of the Ticklist shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
