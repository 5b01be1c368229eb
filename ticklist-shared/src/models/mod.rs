/// Database models for Ticklist
///
/// This module contains the two persisted entities and their CRUD
/// operations. Each operation takes a `&PgPool` and returns plain sqlx
/// results; business rules (uniqueness checks, validation, hashing) live
/// in the `service` module.
///
/// # Models
///
/// - `task`: To-do items with a unique title and a due date
/// - `user`: Accounts with hashed credentials and comma-separated roles

pub mod task;
pub mod user;
