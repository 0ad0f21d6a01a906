//! Unified error types for the boxing catalog
//!
//! Every layer reports failures through `DomainError`. Storage adapters
//! translate SeaORM errors at their boundary so no `DbErr` escapes the crate.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Entity already exists: {0}")]
    DuplicateEntity(String),

    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Translate a SeaORM error into the domain taxonomy.
    ///
    /// Unique-constraint violations become `DuplicateEntity`; anything else is
    /// wrapped opaquely as `Storage`.
    pub fn from_db(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::DuplicateEntity(msg),
            _ => DomainError::Storage(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
