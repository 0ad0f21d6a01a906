//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod boxer;
pub mod fight;
pub mod leaderboard;

pub use boxer::{
    Boxer, BoxerId, NewBoxer, WeightClass, HEAVYWEIGHT_FLOOR, LIGHTWEIGHT_FLOOR, MAX_AGE, MIN_AGE,
    MIDDLEWEIGHT_FLOOR, MIN_WEIGHT,
};
pub use fight::FightOutcome;
pub use leaderboard::{LeaderboardEntry, LeaderboardSort};
