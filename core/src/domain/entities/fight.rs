//! Fight outcome recorded against a boxer

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Result of a single fight from one boxer's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FightOutcome {
    Win,
    Loss,
}

impl FightOutcome {
    /// Wins credited by this outcome
    pub fn wins(&self) -> i32 {
        match self {
            FightOutcome::Win => 1,
            FightOutcome::Loss => 0,
        }
    }
}

impl std::fmt::Display for FightOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FightOutcome::Win => write!(f, "win"),
            FightOutcome::Loss => write!(f, "loss"),
        }
    }
}

impl std::str::FromStr for FightOutcome {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(FightOutcome::Win),
            "loss" => Ok(FightOutcome::Loss),
            _ => Err(DomainError::InvalidInput(format!(
                "Invalid result: {}. Expected 'win' or 'loss'.",
                s
            ))),
        }
    }
}
