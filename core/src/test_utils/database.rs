//! Throwaway SQLite databases for adapter tests

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::adapters::create_schema;

/// Open an in-memory SQLite database with the boxers table created.
///
/// The pool is pinned to one connection: every SQLite `:memory:` connection
/// is its own database.
pub async fn sqlite_memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory SQLite database");
    create_schema(&db)
        .await
        .expect("Failed to create boxers table");
    db
}
