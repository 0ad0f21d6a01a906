//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod catalog_service;
pub mod ring;
pub mod ring_config;

pub use catalog_service::CatalogService;
pub use ring::{fight_skill, first_boxer_win_probability, Ring};
// Re-export ring config for public API (constants used by consumers)
#[allow(unused_imports)]
pub use ring_config::*;
