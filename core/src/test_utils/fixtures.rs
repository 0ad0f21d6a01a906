//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use crate::domain::entities::{Boxer, BoxerId, NewBoxer};

/// Create a creation request with default attributes
pub fn new_boxer(name: &str) -> NewBoxer {
    NewBoxer {
        name: name.to_string(),
        weight: 150,
        height: 170,
        reach: 70.0,
        age: 30,
    }
}

/// Create a stored boxer with default attributes and an empty record
pub fn test_boxer(id: i32, name: &str) -> Boxer {
    Boxer {
        id: BoxerId(id),
        name: name.to_string(),
        weight: 150,
        height: 170,
        reach: 70.0,
        age: 30,
        fights: 0,
        wins: 0,
    }
}

/// Create a stored boxer with a specific record
pub fn test_boxer_with_record(id: i32, name: &str, fights: i32, wins: i32) -> Boxer {
    Boxer {
        fights,
        wins,
        ..test_boxer(id, name)
    }
}

/// Create a stored boxer with specific fighting attributes
pub fn test_boxer_with_build(id: i32, name: &str, weight: i32, reach: f64, age: i32) -> Boxer {
    Boxer {
        weight,
        reach,
        age,
        ..test_boxer(id, name)
    }
}
