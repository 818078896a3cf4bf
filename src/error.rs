//! Error types for bracket-seed.
//!
//! Configuration problems are caught at construction time; shape problems
//! surface from the seeding run itself. There is no partial-result mode:
//! a seeding either completes or fails wholesale.

use thiserror::Error;

/// Errors raised while assembling a seeding configuration or a search
/// strategy. All of these are detectable before any search work starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension's weight lies outside `[0.0, 1.0]`.
    #[error("dimension {index} has weight {weight}, expected a value in [0.0, 1.0]")]
    WeightOutOfRange { index: usize, weight: f64 },

    /// A seeding needs at least one dimension to score anything.
    #[error("seeding configured with no dimensions")]
    NoDimensions,

    /// Annealing must start at a positive temperature.
    #[error("initial temperature must be positive, got {0}")]
    InvalidInitialTemperature(f64),

    /// The termination floor must be positive and below the start.
    #[error("temperature floor must be positive and below the initial temperature {initial}, got {floor}")]
    InvalidTemperatureFloor { floor: f64, initial: f64 },

    /// Geometric cooling only converges for rates strictly inside (0, 1).
    #[error("cooling rate must be in (0.0, 1.0), got {0}")]
    InvalidCoolingRate(f64),
}

/// Errors raised by a seeding run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// Pairing positions `2i` and `2i+1` is undefined for an odd number of
    /// entrants; the trailing entrant is never silently dropped.
    #[error("cannot pair an ordering of {len} entrants; pairing requires an even length")]
    OddOrdering { len: usize },
}

/// Errors from the geocoding collaborator boundary.
///
/// The engine neither retries nor caches these; they propagate to the
/// caller untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// The backing gazetteer has no entry for the given place name.
    #[error("no coordinates found for \"{0}\"")]
    UnknownPlace(String),
}
