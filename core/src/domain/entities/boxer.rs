//! Boxer domain entity
//!
//! A competitor with physical attributes and a win/loss record. The weight
//! class is derived from weight on every read and never stored.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Lightest weight a boxer may register with
pub const MIN_WEIGHT: i32 = 125;

/// Youngest age a boxer may register with
pub const MIN_AGE: i32 = 18;

/// Oldest age a boxer may register with
pub const MAX_AGE: i32 = 40;

/// Lower bound (inclusive) of the heavyweight class
pub const HEAVYWEIGHT_FLOOR: i32 = 203;

/// Lower bound (inclusive) of the middleweight class
pub const MIDDLEWEIGHT_FLOOR: i32 = 166;

/// Lower bound (inclusive) of the lightweight class
pub const LIGHTWEIGHT_FLOOR: i32 = 133;

/// Unique identifier for a boxer, assigned by storage on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoxerId(pub i32);

impl From<i32> for BoxerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BoxerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Weight class derived from a boxer's weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeightClass {
    Featherweight,
    Lightweight,
    Middleweight,
    Heavyweight,
}

impl WeightClass {
    /// Classify a weight. Weights below the registration floor are rejected.
    pub fn from_weight(weight: i32) -> Result<Self, DomainError> {
        match weight {
            HEAVYWEIGHT_FLOOR.. => Ok(WeightClass::Heavyweight),
            MIDDLEWEIGHT_FLOOR.. => Ok(WeightClass::Middleweight),
            LIGHTWEIGHT_FLOOR.. => Ok(WeightClass::Lightweight),
            MIN_WEIGHT.. => Ok(WeightClass::Featherweight),
            _ => {
                tracing::info!(weight, "Rejected weight below the featherweight floor");
                Err(DomainError::InvalidInput(format!(
                    "Invalid weight: {}. Weight must be at least {}.",
                    weight, MIN_WEIGHT
                )))
            }
        }
    }
}

impl std::fmt::Display for WeightClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightClass::Featherweight => write!(f, "FEATHERWEIGHT"),
            WeightClass::Lightweight => write!(f, "LIGHTWEIGHT"),
            WeightClass::Middleweight => write!(f, "MIDDLEWEIGHT"),
            WeightClass::Heavyweight => write!(f, "HEAVYWEIGHT"),
        }
    }
}

impl std::str::FromStr for WeightClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FEATHERWEIGHT" => Ok(WeightClass::Featherweight),
            "LIGHTWEIGHT" => Ok(WeightClass::Lightweight),
            "MIDDLEWEIGHT" => Ok(WeightClass::Middleweight),
            "HEAVYWEIGHT" => Ok(WeightClass::Heavyweight),
            _ => Err(format!("Unknown weight class: {}", s)),
        }
    }
}

/// A persisted boxer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boxer {
    pub id: BoxerId,
    pub name: String,
    pub weight: i32,
    pub height: i32,
    pub reach: f64,
    pub age: i32,
    pub fights: i32,
    pub wins: i32,
}

impl Boxer {
    /// Weight class computed from the current weight
    pub fn weight_class(&self) -> Result<WeightClass, DomainError> {
        WeightClass::from_weight(self.weight)
    }

    /// Wins as a percentage of fights, rounded to one decimal place.
    /// `None` until the boxer has fought.
    pub fn win_pct(&self) -> Option<f64> {
        if self.fights <= 0 {
            return None;
        }
        let ratio = f64::from(self.wins) / f64::from(self.fights);
        Some((ratio * 1000.0).round() / 10.0)
    }

    /// Check that this value describes a boxer the catalog could hold:
    /// registration ranges plus a consistent fight record.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_attributes(&self.name, self.weight, self.height, self.reach, self.age)?;

        if self.fights < 0 || self.wins < 0 || self.wins > self.fights {
            return Err(DomainError::InvalidInput(format!(
                "Invalid record: {} wins in {} fights.",
                self.wins, self.fights
            )));
        }

        Ok(())
    }
}

/// Data needed to create a new boxer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewBoxer {
    pub name: String,
    pub weight: i32,
    pub height: i32,
    pub reach: f64,
    pub age: i32,
}

impl NewBoxer {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_attributes(&self.name, self.weight, self.height, self.reach, self.age)
    }
}

fn validate_attributes(
    name: &str,
    weight: i32,
    height: i32,
    reach: f64,
    age: i32,
) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidInput(
            "Invalid name: name must not be empty.".to_string(),
        ));
    }
    if weight < MIN_WEIGHT {
        return Err(DomainError::InvalidInput(format!(
            "Invalid weight: {}. Must be at least {}.",
            weight, MIN_WEIGHT
        )));
    }
    if height <= 0 {
        return Err(DomainError::InvalidInput(format!(
            "Invalid height: {}. Must be greater than 0.",
            height
        )));
    }
    // NaN fails the comparison as well
    if !(reach > 0.0 && reach.is_finite()) {
        return Err(DomainError::InvalidInput(format!(
            "Invalid reach: {}. Must be greater than 0.",
            reach
        )));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(DomainError::InvalidInput(format!(
            "Invalid age: {}. Must be between {} and {}.",
            age, MIN_AGE, MAX_AGE
        )));
    }
    Ok(())
}
