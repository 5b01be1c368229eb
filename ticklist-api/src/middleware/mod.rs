/// Middleware modules for the API server
///
/// This module contains custom middleware for:
/// - HTTP Basic authentication against stored password hashes

pub mod auth;
