//! Simulated-annealing search.
//!
//! Single-trajectory optimization over candidate orderings: neighbors are
//! generated by swapping two random positions, worsening proposals are
//! accepted with a probability that shrinks as the temperature cools,
//! letting the search escape local optima early and settle late.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::SearchStrategy;
use crate::error::ConfigError;

/// Configuration for [`AnnealingSearch`].
///
/// # Examples
///
/// ```
/// use bracket_seed::strategy::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(2.0)
///     .with_cooling_rate(0.98)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more worsening moves
    /// early on. Aggregate fitness moves in per-pair steps of at most 1.0,
    /// so temperatures near 1.0 suit typical configurations.
    pub initial_temperature: f64,

    /// The search stops once the temperature drops below this floor.
    pub temperature_floor: f64,

    /// Geometric cooling rate in (0, 1): `T *= rate` after every
    /// iteration. Higher = slower cooling.
    pub cooling_rate: f64,

    /// Hard iteration cap. 0 = no cap; the floor alone terminates.
    pub max_iterations: usize,

    /// Random seed for reproducible searches.
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            temperature_floor: 1e-6,
            cooling_rate: 0.95,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_temperature_floor(mut self, t: f64) -> Self {
        self.temperature_floor = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_temperature <= 0.0 {
            return Err(ConfigError::InvalidInitialTemperature(
                self.initial_temperature,
            ));
        }
        if self.temperature_floor <= 0.0 || self.temperature_floor >= self.initial_temperature {
            return Err(ConfigError::InvalidTemperatureFloor {
                floor: self.temperature_floor,
                initial: self.initial_temperature,
            });
        }
        if self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(ConfigError::InvalidCoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}

/// Simulated-annealing [`SearchStrategy`].
///
/// The engine scores each proposal and reports the fitness back on the
/// following call, so acceptance of a proposal happens one step delayed:
/// an improving proposal always becomes the new incumbent, a worsening
/// one does so with probability `exp((new - current) / T)`, and the
/// temperature cools geometrically after every step. The best ordering
/// seen is tracked separately and handed back as the final candidate, so
/// the engine's "last candidate produced" is the best one found.
///
/// Deterministic for a fixed [`AnnealingConfig::seed`].
pub struct AnnealingSearch<T> {
    config: AnnealingConfig,
    temperature: f64,
    iterations: usize,
    rng: StdRng,
    incumbent: Option<(Vec<T>, f64)>,
    best: Option<(Vec<T>, f64)>,
}

impl<T: Clone> AnnealingSearch<T> {
    /// Creates a strategy from a validated configuration.
    pub fn new(config: AnnealingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        Ok(Self {
            temperature: config.initial_temperature,
            iterations: 0,
            rng,
            incumbent: None,
            best: None,
            config,
        })
    }

    /// Current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Iterations performed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Fitness of the best ordering seen so far, if any proposal has been
    /// scored yet.
    pub fn best_fitness(&self) -> Option<f64> {
        self.best.as_ref().map(|(_, fitness)| *fitness)
    }
}

impl<T: Clone + Send> SearchStrategy<T> for AnnealingSearch<T> {
    fn can_continue(&self) -> bool {
        self.temperature > self.config.temperature_floor
            && (self.config.max_iterations == 0 || self.iterations < self.config.max_iterations)
    }

    fn next_candidate(&mut self, current: &[T], current_fitness: f64) -> Vec<T> {
        // Metropolis acceptance of the proposal the engine just scored.
        // The very first call seeds the trajectory with the initial
        // ordering, accepted unconditionally.
        let accept = match &self.incumbent {
            None => true,
            Some((_, incumbent_fitness)) => {
                let delta = current_fitness - incumbent_fitness;
                delta > 0.0 || self.rng.random_range(0.0..1.0) < (delta / self.temperature).exp()
            }
        };

        if accept {
            self.incumbent = Some((current.to_vec(), current_fitness));
            let improved = self
                .best
                .as_ref()
                .is_none_or(|(_, best_fitness)| current_fitness > *best_fitness);
            if improved {
                self.best = Some((current.to_vec(), current_fitness));
            }
        }

        self.temperature *= self.config.cooling_rate;
        self.iterations += 1;

        if !self.can_continue() {
            if let Some((best, _)) = &self.best {
                return best.clone();
            }
        }

        match &self.incumbent {
            Some((base, _)) => {
                let mut neighbor = base.clone();
                if neighbor.len() >= 2 {
                    let i = self.rng.random_range(0..neighbor.len());
                    let j = self.rng.random_range(0..neighbor.len());
                    neighbor.swap(i, j);
                }
                neighbor
            }
            // Unreachable: the first call always sets the incumbent.
            None => current.to_vec(),
        }
    }
}
