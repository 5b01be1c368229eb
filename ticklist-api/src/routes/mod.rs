/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `tasks`: Task CRUD and derived list views
/// - `users`: User CRUD

pub mod health;
pub mod tasks;
pub mod users;
