//! SeaORM entities
//!
//! Table models used by the database adapters. Domain code works with
//! `crate::domain::entities` and never sees these types.

pub mod boxers;
