/// Business services for Ticklist
///
/// Services own a pool handle and apply the business rules on top of the
/// raw model CRUD: uniqueness checks before insert, input validation,
/// password hashing, and the derived task list views. Every operation
/// re-reads from the store; no state is cached across calls.
///
/// # Modules
///
/// - `task`: Task CRUD plus the pending/completed/due-today views
/// - `user`: User CRUD plus credential hashing and uniqueness checks

pub mod task;
pub mod user;
