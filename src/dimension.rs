//! The scoring model: fitness comparators and seed dimensions.
//!
//! A [`SeedDimension`] binds one axis of comparison into a self-contained,
//! composable unit. Dimensions with different property types live side by
//! side in one configuration behind the object-safe [`Dimension`] trait.

/// A facility for scoring the match quality of a pair of property values.
///
/// Minimally-matchable pairs score `0.0`, maximally-matchable pairs `1.0`.
/// Implementations **must** be commutative
/// (`match_fitness(l, r) == match_fitness(r, l)`), pure, deterministic,
/// and total over their domain. The range is not checked in the scoring
/// hot path; violations are comparator defects to be caught by tests.
///
/// Blanket-implemented for closures and fn pointers, so a plain function
/// plugs in directly:
///
/// ```
/// use bracket_seed::dimension::FitnessComparator;
///
/// let parity = |left: &f64, right: &f64| 1.0 - (left - right).abs();
/// assert_eq!(parity.match_fitness(&0.3, &0.3), 1.0);
/// ```
pub trait FitnessComparator<U>: Send + Sync {
    /// Calculates the match fitness for a pair of property values,
    /// in `[0.0, 1.0]`.
    fn match_fitness(&self, left: &U, right: &U) -> f64;
}

impl<U, F> FitnessComparator<U> for F
where
    F: Fn(&U, &U) -> f64 + Send + Sync,
{
    fn match_fitness(&self, left: &U, right: &U) -> f64 {
        self(left, right)
    }
}

type Projection<T, U> = Box<dyn Fn(&T) -> U + Send + Sync>;
type Combiner<U> = Box<dyn Fn(&U, &U) -> U + Send + Sync>;

/// A single dimension on which to evaluate entrants.
///
/// Holds four pieces, all fixed at construction:
///
/// - a `weight` from `0.0` to `1.0` for how heavily this dimension should
///   count in aggregation (carried and validated, but not yet applied by
///   the aggregation formula; see [`Dimension::weight`]);
/// - a `project` function extracting the property value out of an entrant;
/// - an `average` combinator over two property values, reserved for
///   estimating an expected winner's property when seeding later bracket
///   rounds (single-round scoring never calls it);
/// - a [`FitnessComparator`] on the property type.
///
/// # Type Parameters
///
/// * `T` - The entrant type
/// * `U` - The property type on which entrants are evaluated
pub struct SeedDimension<T, U> {
    weight: f64,
    project: Projection<T, U>,
    average: Combiner<U>,
    comparator: Box<dyn FitnessComparator<U>>,
}

impl<T, U> SeedDimension<T, U> {
    /// Creates a dimension from its four parts.
    ///
    /// Weight-range validation happens when the dimension is assembled
    /// into a [`Seeding`](crate::seeding::Seeding), not here.
    pub fn new(
        weight: f64,
        project: impl Fn(&T) -> U + Send + Sync + 'static,
        average: impl Fn(&U, &U) -> U + Send + Sync + 'static,
        comparator: impl FitnessComparator<U> + 'static,
    ) -> Self {
        Self {
            weight,
            project: Box::new(project),
            average: Box::new(average),
            comparator: Box::new(comparator),
        }
    }

    /// Extracts this dimension's property value from an entrant.
    pub fn project(&self, entrant: &T) -> U {
        (self.project)(entrant)
    }

    /// Combines two property values into the expected value for the
    /// winner of their matchup.
    ///
    /// Part of the public contract for future multi-round propagation;
    /// unused by single-round scoring.
    pub fn average(&self, left: &U, right: &U) -> U {
        (self.average)(left, right)
    }

    /// Scores a pair of already-projected property values.
    pub fn match_fitness(&self, left: &U, right: &U) -> f64 {
        self.comparator.match_fitness(left, right)
    }
}

/// Object-safe view of a seed dimension.
///
/// Erases the property type `U` so that dimensions over heterogeneous
/// properties (skill as `f64`, location as `LatLong`, ...) can share one
/// configuration as `Box<dyn Dimension<T>>`.
pub trait Dimension<T>: Send + Sync {
    /// This dimension's aggregation weight in `[0.0, 1.0]`.
    ///
    /// Validated at configuration build time. The present aggregation
    /// formula sums unweighted pairwise scores; the weight is part of the
    /// data contract ahead of weighted aggregation.
    fn weight(&self) -> f64;

    /// Projects both entrants and scores the resulting property pair.
    fn pair_fitness(&self, left: &T, right: &T) -> f64;
}

impl<T, U> Dimension<T> for SeedDimension<T, U>
where
    T: Send + Sync,
    U: Send + Sync,
{
    fn weight(&self) -> f64 {
        self.weight
    }

    fn pair_fitness(&self, left: &T, right: &T) -> f64 {
        let l = self.project(left);
        let r = self.project(right);
        self.comparator.match_fitness(&l, &r)
    }
}
