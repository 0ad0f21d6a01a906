//! Randomness port
//!
//! Fight resolution draws exactly one value per fight from a `RandomSource`,
//! so tests can pin outcomes with a fixed source.

/// Supplies uniform random values on demand.
pub trait RandomSource: Send + Sync {
    /// A uniform value in `[0, 1)`.
    fn next_unit(&self) -> f64;
}
