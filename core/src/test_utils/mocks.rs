//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Boxer, BoxerId, FightOutcome, NewBoxer};
use crate::domain::ports::{BoxerRepository, RandomSource};
use crate::error::DomainError;

// ============================================================================
// In-Memory Boxer Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBoxerRepository {
    boxers: Arc<RwLock<BTreeMap<BoxerId, Boxer>>>,
    next_id: Arc<RwLock<i32>>,
    /// IDs whose stat updates fail with a storage error
    failing_updates: Arc<RwLock<HashSet<BoxerId>>>,
}

impl InMemoryBoxerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a boxer for testing
    pub fn with_boxer(self, boxer: Boxer) -> Self {
        {
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(boxer.id.0);
            self.boxers.write().unwrap().insert(boxer.id, boxer);
        }
        self
    }

    /// Make `record_result` fail for this boxer
    pub fn with_failing_updates(self, id: BoxerId) -> Self {
        self.failing_updates.write().unwrap().insert(id);
        self
    }

    /// Snapshot of a stored boxer, bypassing the trait
    pub fn get(&self, id: BoxerId) -> Option<Boxer> {
        self.boxers.read().unwrap().get(&id).cloned()
    }
}

#[async_trait]
impl BoxerRepository for InMemoryBoxerRepository {
    async fn find_by_id(&self, id: &BoxerId) -> Result<Option<Boxer>, DomainError> {
        let boxers = self.boxers.read().unwrap();
        Ok(boxers.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Boxer>, DomainError> {
        let boxers = self.boxers.read().unwrap();
        Ok(boxers.values().find(|b| b.name == name).cloned())
    }

    async fn create(&self, new_boxer: &NewBoxer) -> Result<Boxer, DomainError> {
        let mut boxers = self.boxers.write().unwrap();
        if boxers.values().any(|b| b.name == new_boxer.name) {
            return Err(DomainError::DuplicateEntity(format!(
                "Boxer with name '{}' already exists",
                new_boxer.name
            )));
        }

        let mut next_id = self.next_id.write().unwrap();
        *next_id += 1;

        let boxer = Boxer {
            id: BoxerId(*next_id),
            name: new_boxer.name.clone(),
            weight: new_boxer.weight,
            height: new_boxer.height,
            reach: new_boxer.reach,
            age: new_boxer.age,
            fights: 0,
            wins: 0,
        };
        boxers.insert(boxer.id, boxer.clone());
        Ok(boxer)
    }

    async fn delete(&self, id: &BoxerId) -> Result<bool, DomainError> {
        let mut boxers = self.boxers.write().unwrap();
        Ok(boxers.remove(id).is_some())
    }

    async fn find_ranked(&self) -> Result<Vec<Boxer>, DomainError> {
        let boxers = self.boxers.read().unwrap();
        Ok(boxers.values().filter(|b| b.fights > 0).cloned().collect())
    }

    async fn record_result(
        &self,
        id: &BoxerId,
        outcome: FightOutcome,
    ) -> Result<bool, DomainError> {
        if self.failing_updates.read().unwrap().contains(id) {
            return Err(DomainError::Storage(format!(
                "simulated failure updating boxer {}",
                id
            )));
        }

        let mut boxers = self.boxers.write().unwrap();
        match boxers.get_mut(id) {
            Some(boxer) => {
                boxer.fights += 1;
                boxer.wins += outcome.wins();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.boxers.read().unwrap().len() as u64)
    }
}

// ============================================================================
// Fixed Random Source
// ============================================================================

/// RandomSource that always returns the same value and counts draws
#[derive(Default)]
pub struct FixedRandom {
    value: f64,
    draws: AtomicUsize,
}

impl FixedRandom {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            draws: AtomicUsize::new(0),
        }
    }

    /// How many values have been drawn
    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.value
    }
}
