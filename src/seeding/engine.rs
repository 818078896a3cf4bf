//! The seeding engine: fitness aggregation and the search driver loop.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::builtin;
use crate::dimension::Dimension;
use crate::entrant::Entrant;
use crate::error::SeedError;
use crate::strategy::{NoSearch, SearchStrategy};

/// A seeding of entrants into ordered bracket slots.
///
/// Immutable after construction apart from the strategy's private policy
/// state; build one via [`SeedingBuilder`](super::SeedingBuilder) per
/// seeding invocation.
///
/// # Examples
///
/// ```
/// use bracket_seed::builtin;
/// use bracket_seed::entrant::Entrant;
/// use bracket_seed::seeding::Seeding;
///
/// #[derive(Clone)]
/// struct Player(f64);
///
/// impl Entrant for Player {
///     fn skill(&self) -> f64 {
///         self.0
///     }
/// }
///
/// let mut seeding = Seeding::by_default_skill();
/// let seeded = seeding
///     .seed([Player(0.9), Player(0.1), Player(0.5), Player(0.5)])
///     .unwrap();
/// assert_eq!(seeded.len(), 4);
/// ```
pub struct Seeding<T> {
    dimensions: Vec<Box<dyn Dimension<T>>>,
    strategy: Box<dyn SearchStrategy<T>>,
}

impl<T: Send + Sync> Seeding<T> {
    /// Starts an empty builder.
    pub fn builder() -> super::SeedingBuilder<T> {
        super::SeedingBuilder::new()
    }

    pub(crate) fn from_parts(
        dimensions: Vec<Box<dyn Dimension<T>>>,
        strategy: Box<dyn SearchStrategy<T>>,
    ) -> Self {
        Self {
            dimensions,
            strategy,
        }
    }

    /// Turns an unordered entrant set into an optimized ordered sequence.
    ///
    /// Materializes the entrants into an arbitrary initial ordering, then
    /// drives the strategy: while it can continue, the strategy proposes
    /// the next candidate given the current one and its fitness. Returns
    /// the last candidate produced, which is the initial ordering if the
    /// strategy never advances.
    ///
    /// # Errors
    ///
    /// [`SeedError::OddOrdering`] when pairing is undefined because the
    /// entrant count is odd and greater than one.
    pub fn seed(&mut self, entrants: impl IntoIterator<Item = T>) -> Result<Vec<T>, SeedError> {
        let mut candidate: Vec<T> = entrants.into_iter().collect();
        let mut fitness = self.fitness(&candidate)?;

        while self.strategy.can_continue() {
            candidate = self.strategy.next_candidate(&candidate, fitness);
            fitness = self.fitness(&candidate)?;
        }

        Ok(candidate)
    }

    /// Aggregate fitness of a candidate ordering: the sum over all
    /// configured dimensions of the pairwise scores of positions
    /// `(2i, 2i + 1)`.
    ///
    /// An ordering of length 0 or 1 has no pairs and scores `0.0`.
    ///
    /// # Errors
    ///
    /// [`SeedError::OddOrdering`] for odd lengths greater than one; the
    /// trailing entrant is never silently dropped.
    pub fn fitness(&self, ordering: &[T]) -> Result<f64, SeedError> {
        if ordering.len() <= 1 {
            return Ok(0.0);
        }
        if ordering.len() % 2 != 0 {
            return Err(SeedError::OddOrdering {
                len: ordering.len(),
            });
        }

        Ok(self.dimension_sum(ordering))
    }

    #[cfg(not(feature = "parallel"))]
    fn dimension_sum(&self, ordering: &[T]) -> f64 {
        self.dimensions
            .iter()
            .map(|dimension| fitness_in_one_dimension(dimension.as_ref(), ordering))
            .sum()
    }

    // Projection and comparison are pure over shared immutable data, so
    // the per-dimension partial sums can be evaluated concurrently and
    // reduced without locking.
    #[cfg(feature = "parallel")]
    fn dimension_sum(&self, ordering: &[T]) -> f64 {
        self.dimensions
            .par_iter()
            .map(|dimension| fitness_in_one_dimension(dimension.as_ref(), ordering))
            .sum()
    }
}

impl<T: Entrant + Clone + Send + Sync + 'static> Seeding<T> {
    /// The sample default configuration: a single skill dimension with
    /// weight 1.0 and the identity strategy.
    pub fn by_default_skill() -> Self {
        Self {
            dimensions: vec![Box::new(builtin::skill_dimension())],
            strategy: Box::new(NoSearch),
        }
    }
}

fn fitness_in_one_dimension<T>(dimension: &dyn Dimension<T>, ordering: &[T]) -> f64 {
    ordering
        .chunks_exact(2)
        .map(|pair| dimension.pair_fitness(&pair[0], &pair[1]))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;
    use crate::dimension::SeedDimension;
    use crate::strategy::{AnnealingConfig, AnnealingSearch};

    #[derive(Debug, Clone, PartialEq)]
    struct Player {
        name: &'static str,
        skill: f64,
    }

    impl Player {
        fn new(name: &'static str, skill: f64) -> Self {
            Self { name, skill }
        }
    }

    impl Entrant for Player {
        fn skill(&self) -> f64 {
            self.skill
        }
    }

    fn skill_seeding() -> Seeding<Player> {
        Seeding::builder()
            .dimension(builtin::skill_dimension())
            .build()
            .unwrap()
    }

    fn closeness_dimension() -> SeedDimension<Player, f64> {
        SeedDimension::new(
            1.0,
            |p: &Player| p.skill,
            |l: &f64, r: &f64| (l + r) / 2.0,
            |l: &f64, r: &f64| 1.0 - (l - r).abs(),
        )
    }

    #[test]
    fn test_seed_empty_set_is_empty() {
        let mut seeding = skill_seeding();
        let seeded = seeding.seed([]).unwrap();
        assert!(seeded.is_empty());
        assert_eq!(seeding.fitness(&seeded), Ok(0.0));
    }

    #[test]
    fn test_seed_singleton_is_unchanged() {
        let mut seeding = skill_seeding();
        let seeded = seeding.seed([Player::new("solo", 0.7)]).unwrap();
        assert_eq!(seeded, vec![Player::new("solo", 0.7)]);
        assert_eq!(seeding.fitness(&seeded), Ok(0.0));
    }

    #[test]
    fn test_odd_ordering_fails_fast() {
        let mut seeding = skill_seeding();
        let entrants = [
            Player::new("a", 0.9),
            Player::new("b", 0.5),
            Player::new("c", 0.1),
        ];
        assert_eq!(
            seeding.seed(entrants),
            Err(SeedError::OddOrdering { len: 3 })
        );
    }

    #[test]
    fn test_no_search_preserves_initial_order() {
        let entrants = vec![
            Player::new("a", 0.9),
            Player::new("b", 0.5),
            Player::new("c", 0.1),
            Player::new("d", 0.5),
        ];
        let mut seeding = skill_seeding();
        let seeded = seeding.seed(entrants.clone()).unwrap();
        assert_eq!(seeded, entrants);
    }

    #[test]
    fn test_default_skill_seeding_preserves_initial_order() {
        let entrants = vec![Player::new("a", 0.2), Player::new("b", 0.9)];
        let mut seeding = Seeding::by_default_skill();
        let seeded = seeding.seed(entrants.clone()).unwrap();
        assert_eq!(seeded, entrants);
    }

    #[test]
    fn test_fitness_sums_pairwise_scores() {
        let seeding = skill_seeding();
        let ordering = [
            Player::new("a", 0.9),
            Player::new("b", 0.1),
            Player::new("c", 0.5),
            Player::new("d", 0.5),
        ];
        // Pairs (0.9, 0.1) and (0.5, 0.5) both sum to 1.0, each scoring
        // 1.0 under the default skill comparator.
        let fitness = seeding.fitness(&ordering).unwrap();
        assert!((fitness - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_fitness_penalizes_unbalanced_pairs() {
        let seeding = skill_seeding();
        let ordering = [
            Player::new("a", 0.9),
            Player::new("b", 0.5),
            Player::new("c", 0.1),
            Player::new("d", 0.5),
        ];
        // Both pairs sum to 1.4 and 0.6, each scoring 0.6.
        let fitness = seeding.fitness(&ordering).unwrap();
        assert!((fitness - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_fitness_sums_across_dimensions() {
        let seeding = Seeding::builder()
            .dimension(builtin::skill_dimension())
            .dimension(closeness_dimension())
            .build()
            .unwrap();
        let ordering = [
            Player::new("a", 0.9),
            Player::new("b", 0.1),
            Player::new("c", 0.5),
            Player::new("d", 0.5),
        ];
        // Skill dimension: 1.0 + 1.0. Closeness dimension: 0.2 + 1.0.
        let fitness = seeding.fitness(&ordering).unwrap();
        assert!((fitness - 3.2).abs() < 1e-12);
    }

    #[test]
    fn test_annealing_finds_the_balanced_pairing() {
        let entrants = vec![
            Player::new("a", 0.9),
            Player::new("b", 0.5),
            Player::new("c", 0.1),
            Player::new("d", 0.5),
        ];
        let strategy =
            AnnealingSearch::new(AnnealingConfig::default().with_seed(42)).unwrap();
        let mut seeding = Seeding::builder()
            .dimension(builtin::skill_dimension())
            .strategy(strategy)
            .build()
            .unwrap();

        let initial_fitness = seeding.fitness(&entrants).unwrap();
        let seeded = seeding.seed(entrants).unwrap();
        let final_fitness = seeding.fitness(&seeded).unwrap();

        assert!(final_fitness >= initial_fitness);
        // Optimum pairs 0.9 with 0.1 and 0.5 with 0.5; the default
        // schedule runs a few hundred swaps over 4! orderings.
        assert!((final_fitness - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_annealing_seed_is_deterministic_under_fixed_seed() {
        let entrants = vec![
            Player::new("a", 0.8),
            Player::new("b", 0.3),
            Player::new("c", 0.1),
            Player::new("d", 0.6),
            Player::new("e", 0.4),
            Player::new("f", 0.9),
        ];

        let mut runs = Vec::new();
        for _ in 0..2 {
            let strategy =
                AnnealingSearch::new(AnnealingConfig::default().with_seed(7)).unwrap();
            let mut seeding = Seeding::builder()
                .dimension(builtin::skill_dimension())
                .strategy(strategy)
                .build()
                .unwrap();
            runs.push(seeding.seed(entrants.clone()).unwrap());
        }

        assert_eq!(runs[0], runs[1]);
    }
}
