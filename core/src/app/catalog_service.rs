//! Boxer catalog service
//!
//! Owns the persisted roster: registration, lookup, removal, stat updates and
//! the leaderboard. All storage goes through the `BoxerRepository` port.

use std::sync::Arc;

use crate::domain::entities::{
    Boxer, BoxerId, FightOutcome, LeaderboardEntry, LeaderboardSort, NewBoxer,
};
use crate::domain::ports::BoxerRepository;
use crate::error::DomainError;

/// Service for boxer catalog operations
pub struct CatalogService<R: BoxerRepository> {
    boxers: Arc<R>,
}

impl<R: BoxerRepository> CatalogService<R> {
    pub fn new(boxers: Arc<R>) -> Self {
        Self { boxers }
    }

    /// Register a new boxer with an empty record
    pub async fn create(&self, boxer: NewBoxer) -> Result<Boxer, DomainError> {
        if let Err(e) = boxer.validate() {
            tracing::warn!(name = %boxer.name, error = %e, "Rejected boxer registration");
            return Err(e);
        }

        if self.boxers.find_by_name(&boxer.name).await?.is_some() {
            tracing::warn!(name = %boxer.name, "Duplicate boxer detected");
            return Err(DomainError::DuplicateEntity(format!(
                "Boxer with name '{}' already exists",
                boxer.name
            )));
        }

        let created = self.boxers.create(&boxer).await.inspect_err(|e| {
            tracing::error!(name = %boxer.name, error = %e, "Failed to create boxer");
        })?;

        tracing::info!(boxer_id = %created.id, name = %created.name, "Boxer created");
        Ok(created)
    }

    /// Permanently remove a boxer
    pub async fn delete(&self, id: &BoxerId) -> Result<(), DomainError> {
        if !self.boxers.delete(id).await? {
            tracing::info!(boxer_id = %id, "Boxer to delete not found");
            return Err(DomainError::NotFound(format!(
                "Boxer with ID {} not found.",
                id
            )));
        }

        tracing::info!(boxer_id = %id, "Boxer deleted");
        Ok(())
    }

    /// Get a boxer by ID
    pub async fn get_by_id(&self, id: &BoxerId) -> Result<Boxer, DomainError> {
        self.boxers.find_by_id(id).await?.ok_or_else(|| {
            tracing::info!(boxer_id = %id, "Boxer not found");
            DomainError::NotFound(format!("Boxer with ID {} not found.", id))
        })
    }

    /// Get a boxer by name
    pub async fn get_by_name(&self, name: &str) -> Result<Boxer, DomainError> {
        self.boxers.find_by_name(name).await?.ok_or_else(|| {
            tracing::info!(name, "Boxer not found");
            DomainError::NotFound(format!("Boxer '{}' not found.", name))
        })
    }

    /// Boxers with at least one fight, best first
    pub async fn leaderboard(
        &self,
        sort: LeaderboardSort,
    ) -> Result<Vec<LeaderboardEntry>, DomainError> {
        let mut ranked = self.boxers.find_ranked().await?;
        ranked.sort_by(|a, b| sort.compare(a, b));

        let entries = ranked
            .into_iter()
            .map(LeaderboardEntry::from_boxer)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(sort = %sort, entries = entries.len(), "Leaderboard built");
        Ok(entries)
    }

    /// Add a fight result to a boxer's record
    pub async fn record_result(
        &self,
        id: &BoxerId,
        outcome: FightOutcome,
    ) -> Result<(), DomainError> {
        if !self.boxers.record_result(id, outcome).await? {
            tracing::info!(boxer_id = %id, %outcome, "Boxer to update not found");
            return Err(DomainError::NotFound(format!(
                "Boxer with ID {} not found.",
                id
            )));
        }

        tracing::info!(boxer_id = %id, %outcome, "Boxer stats updated");
        Ok(())
    }
}
