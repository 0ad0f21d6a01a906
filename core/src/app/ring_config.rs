//! Ring configuration constants
//!
//! Defines occupancy and the fighting-skill heuristic's age modifiers.

/// Boxers a ring can hold
pub const RING_CAPACITY: usize = 2;

/// Boxers younger than this fight with `YOUTH_MODIFIER`
pub const YOUTH_AGE_LIMIT: i32 = 25;

/// Boxers older than this fight with `VETERAN_MODIFIER`
pub const VETERAN_AGE_LIMIT: i32 = 35;

/// Skill modifier for young boxers (negative)
pub const YOUTH_MODIFIER: f64 = -1.0;

/// Skill modifier for veteran boxers (negative)
pub const VETERAN_MODIFIER: f64 = -2.0;

/// Reach is divided by this before adding to skill
pub const REACH_DIVISOR: f64 = 10.0;
