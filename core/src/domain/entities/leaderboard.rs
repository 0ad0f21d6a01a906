//! Leaderboard projection
//!
//! A read-only ranking of boxers that have fought at least once.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::boxer::{Boxer, WeightClass};
use crate::error::DomainError;

/// Key the leaderboard is ordered by (descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    #[default]
    Wins,
    WinPct,
}

impl LeaderboardSort {
    /// Order two boxers best-first. Equal keys fall back to id ascending.
    ///
    /// `WinPct` compares `wins / fights` exactly by cross-multiplying, so two
    /// records that round to the same percentage still rank deterministically.
    pub fn compare(&self, a: &Boxer, b: &Boxer) -> Ordering {
        let primary = match self {
            LeaderboardSort::Wins => b.wins.cmp(&a.wins),
            LeaderboardSort::WinPct => {
                let lhs = i64::from(b.wins) * i64::from(a.fights);
                let rhs = i64::from(a.wins) * i64::from(b.fights);
                lhs.cmp(&rhs)
            }
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl std::fmt::Display for LeaderboardSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaderboardSort::Wins => write!(f, "wins"),
            LeaderboardSort::WinPct => write!(f, "win_pct"),
        }
    }
}

impl std::str::FromStr for LeaderboardSort {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wins" => Ok(LeaderboardSort::Wins),
            "win_pct" => Ok(LeaderboardSort::WinPct),
            _ => Err(DomainError::InvalidInput(format!(
                "Invalid sort_by parameter: {}",
                s
            ))),
        }
    }
}

/// A ranked boxer with its derived fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    #[serde(flatten)]
    pub boxer: Boxer,
    pub weight_class: WeightClass,
    /// Percentage rounded to one decimal place
    pub win_pct: f64,
}

impl LeaderboardEntry {
    /// Build an entry for a boxer that has fought at least once
    pub fn from_boxer(boxer: Boxer) -> Result<Self, DomainError> {
        let weight_class = boxer.weight_class()?;
        let win_pct = boxer.win_pct().ok_or_else(|| {
            DomainError::InvalidState(format!(
                "Boxer {} has no fights to rank",
                boxer.id
            ))
        })?;

        Ok(Self {
            boxer,
            weight_class,
            win_pct,
        })
    }
}
