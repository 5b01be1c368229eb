/// Database layer for Ticklist
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool management with a startup health check
/// - `migrations`: Schema migration runner (sqlx migrate)
///
/// Models live in the `models` module at crate root level.

pub mod migrations;
pub mod pool;
