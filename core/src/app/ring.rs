//! Ring
//!
//! A transient pairing of two boxers for a single fight. Resolution draws one
//! random value, records the result for both boxers through the catalog and
//! then empties the ring.

use std::sync::Arc;

use crate::app::catalog_service::CatalogService;
use crate::app::ring_config::{
    REACH_DIVISOR, RING_CAPACITY, VETERAN_AGE_LIMIT, VETERAN_MODIFIER, YOUTH_AGE_LIMIT,
    YOUTH_MODIFIER,
};
use crate::domain::entities::{Boxer, FightOutcome};
use crate::domain::ports::{BoxerRepository, RandomSource};
use crate::error::DomainError;

/// Fighting skill of a boxer.
///
/// `weight * chars(name) + reach / 10 + age modifier`, where the modifier is
/// -1 below 25, -2 above 35 and 0 otherwise.
pub fn fight_skill(boxer: &Boxer) -> f64 {
    let age_modifier = if boxer.age < YOUTH_AGE_LIMIT {
        YOUTH_MODIFIER
    } else if boxer.age > VETERAN_AGE_LIMIT {
        VETERAN_MODIFIER
    } else {
        0.0
    };

    let name_length = boxer.name.chars().count() as f64;
    f64::from(boxer.weight) * name_length + boxer.reach / REACH_DIVISOR + age_modifier
}

/// Probability that the first boxer wins: the logistic of the absolute skill
/// gap, always in `[0.5, 1)`.
pub fn first_boxer_win_probability(skill_1: f64, skill_2: f64) -> f64 {
    let delta = (skill_1 - skill_2).abs();
    1.0 / (1.0 + (-delta).exp())
}

/// A ring holding at most two boxers
pub struct Ring<R, G>
where
    R: BoxerRepository,
    G: RandomSource,
{
    catalog: Arc<CatalogService<R>>,
    random: Arc<G>,
    occupants: Vec<Boxer>,
}

impl<R, G> Ring<R, G>
where
    R: BoxerRepository,
    G: RandomSource,
{
    pub fn new(catalog: Arc<CatalogService<R>>, random: Arc<G>) -> Self {
        Self {
            catalog,
            random,
            occupants: Vec::with_capacity(RING_CAPACITY),
        }
    }

    /// Number of boxers currently in the ring
    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Add a boxer to the ring.
    ///
    /// The same boxer may enter twice; only malformed values and a full ring
    /// are rejected.
    pub fn enter(&mut self, boxer: Boxer) -> Result<(), DomainError> {
        if let Err(e) = boxer.validate() {
            tracing::warn!(boxer_id = %boxer.id, error = %e, "Rejected invalid boxer");
            return Err(e);
        }

        if self.occupants.len() >= RING_CAPACITY {
            tracing::warn!(boxer_id = %boxer.id, "Ring is full");
            return Err(DomainError::CapacityExceeded(
                "Ring is full, cannot add more boxers.".to_string(),
            ));
        }

        tracing::info!(boxer_id = %boxer.id, name = %boxer.name, "Boxer entered the ring");
        self.occupants.push(boxer);
        Ok(())
    }

    /// Empty the ring. Clearing an empty ring is allowed and only logged.
    pub fn clear(&mut self) {
        if self.occupants.is_empty() {
            tracing::warn!("Clearing an empty ring");
            return;
        }

        self.occupants.clear();
        tracing::info!("Ring cleared");
    }

    /// Current occupants in the order they entered
    pub fn boxers(&self) -> Result<&[Boxer], DomainError> {
        if self.occupants.is_empty() {
            return Err(DomainError::InvalidState(
                "The ring is empty.".to_string(),
            ));
        }

        Ok(&self.occupants)
    }

    /// Resolve a fight between the two occupants and return the winner's name.
    ///
    /// Both stat updates are attempted even if the first fails; the first
    /// failure is returned. The ring is emptied either way.
    pub async fn fight(&mut self) -> Result<String, DomainError> {
        tracing::info!("Received request to fight");

        let (first, second) = match self.occupants.as_slice() {
            [first, second] => (first.clone(), second.clone()),
            occupants => {
                tracing::error!(occupants = occupants.len(), "Not enough boxers in the ring");
                return Err(DomainError::InvalidState(format!(
                    "There must be two boxers to start a fight, found {}.",
                    occupants.len()
                )));
            }
        };

        let skill_1 = fight_skill(&first);
        let skill_2 = fight_skill(&second);
        let threshold = first_boxer_win_probability(skill_1, skill_2);
        let roll = self.random.next_unit();

        let (winner, loser) = if roll < threshold {
            (first, second)
        } else {
            (second, first)
        };

        tracing::info!(
            skill_1,
            skill_2,
            threshold,
            roll,
            winner = %winner.name,
            loser = %loser.name,
            "Fight resolved"
        );

        let winner_update = self
            .catalog
            .record_result(&winner.id, FightOutcome::Win)
            .await;
        let loser_update = self
            .catalog
            .record_result(&loser.id, FightOutcome::Loss)
            .await;

        self.clear();

        if let Err(e) = &winner_update {
            tracing::error!(boxer_id = %winner.id, error = %e, "Failed to record win");
        }
        if let Err(e) = &loser_update {
            tracing::error!(boxer_id = %loser.id, error = %e, "Failed to record loss");
        }
        winner_update?;
        loser_update?;

        Ok(winner.name)
    }
}
