//! Boxing catalog
//!
//! A persisted roster of boxers with win/loss records, and a ring that pairs
//! two of them and resolves a fight with a skill heuristic.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod entity;
pub mod error;
pub mod logging;

#[cfg(test)]
mod test_utils;


pub use adapters::{create_schema, SqlBoxerRepository, ThreadRandom};
pub use app::{fight_skill, CatalogService, Ring};
pub use config::Config;
pub use domain::entities::{
    Boxer, BoxerId, FightOutcome, LeaderboardEntry, LeaderboardSort, NewBoxer, WeightClass,
};
pub use domain::ports::{BoxerRepository, RandomSource};
pub use error::DomainError;
pub use logging::init_tracing;
