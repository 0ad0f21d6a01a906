//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod database;
pub mod random;

pub use database::{create_schema, SqlBoxerRepository};
pub use random::ThreadRandom;
