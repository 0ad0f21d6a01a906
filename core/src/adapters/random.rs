//! Randomness adapters

use rand::Rng;

use crate::domain::ports::RandomSource;

/// RandomSource backed by the thread-local RNG
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
