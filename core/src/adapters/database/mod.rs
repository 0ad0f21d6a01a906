//! Database adapters
//!
//! Implementations of repository traits using SeaORM. The same code serves
//! SQLite and PostgreSQL; the backend is picked by the connection URL.

pub mod boxer_repo;
pub mod schema;


pub use boxer_repo::SqlBoxerRepository;
pub use schema::create_schema;
