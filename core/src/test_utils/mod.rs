//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - mockall has lifetime issues with traits containing `&str` parameters
//! - Manual mocks are more explicit and easier to debug
//! - We control exactly what they return without macro magic
//!
//! Adapter-level tests use `sqlite_memory_db` for a real, throwaway database.

pub mod database;
pub mod fixtures;
pub mod mocks;

pub use database::*;
pub use fixtures::*;
pub use mocks::*;
