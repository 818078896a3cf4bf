//! Builder-assembled, construction-validated seeding configuration.

use super::Seeding;
use crate::dimension::Dimension;
use crate::error::ConfigError;
use crate::strategy::{NoSearch, SearchStrategy};

/// Assembles a [`Seeding`] from dimensions and a search strategy.
///
/// Recognized options are exactly the dimensions (each carrying weight,
/// projection, combinator, and comparator) and the strategy; there are no
/// other knobs at this layer. Validation happens once at [`build`](Self::build),
/// never at use time: every weight must lie in `[0.0, 1.0]` and at least
/// one dimension must be present.
pub struct SeedingBuilder<T> {
    dimensions: Vec<Box<dyn Dimension<T>>>,
    strategy: Option<Box<dyn SearchStrategy<T>>>,
}

impl<T> SeedingBuilder<T> {
    pub fn new() -> Self {
        Self {
            dimensions: Vec::new(),
            strategy: None,
        }
    }

    /// Adds a dimension to score candidate orderings on.
    pub fn dimension(mut self, dimension: impl Dimension<T> + 'static) -> Self {
        self.dimensions.push(Box::new(dimension));
        self
    }

    /// Sets the search strategy. Defaults to [`NoSearch`] when unset.
    pub fn strategy(mut self, strategy: impl SearchStrategy<T> + 'static) -> Self {
        self.strategy = Some(Box::new(strategy));
        self
    }

    /// Validates and builds the immutable seeding.
    pub fn build(self) -> Result<Seeding<T>, ConfigError>
    where
        T: Clone + Send + Sync + 'static,
    {
        if self.dimensions.is_empty() {
            return Err(ConfigError::NoDimensions);
        }
        for (index, dimension) in self.dimensions.iter().enumerate() {
            let weight = dimension.weight();
            if !(0.0..=1.0).contains(&weight) {
                return Err(ConfigError::WeightOutOfRange { index, weight });
            }
        }

        let strategy = self.strategy.unwrap_or_else(|| Box::new(NoSearch));
        Ok(Seeding::from_parts(self.dimensions, strategy))
    }
}

impl<T> Default for SeedingBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
