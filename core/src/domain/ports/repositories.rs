//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., SeaORM over SQLite or PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{Boxer, BoxerId, FightOutcome, NewBoxer};
use crate::error::DomainError;

/// Repository for Boxer entities
#[async_trait]
pub trait BoxerRepository: Send + Sync {
    /// Find a boxer by ID
    async fn find_by_id(&self, id: &BoxerId) -> Result<Option<Boxer>, DomainError>;

    /// Find a boxer by name
    async fn find_by_name(&self, name: &str) -> Result<Option<Boxer>, DomainError>;

    /// Create a new boxer with an empty record.
    /// A name collision fails with `DuplicateEntity`.
    async fn create(&self, boxer: &NewBoxer) -> Result<Boxer, DomainError>;

    /// Delete a boxer. Returns false if no boxer had this ID.
    async fn delete(&self, id: &BoxerId) -> Result<bool, DomainError>;

    /// All boxers with at least one fight, in ID order
    async fn find_ranked(&self) -> Result<Vec<Boxer>, DomainError>;

    /// Atomically add one fight (and one win for `Win`) to a boxer's record.
    /// Returns false if no boxer had this ID.
    async fn record_result(&self, id: &BoxerId, outcome: FightOutcome)
        -> Result<bool, DomainError>;

    /// Number of stored boxers
    async fn count(&self) -> Result<u64, DomainError>;
}
