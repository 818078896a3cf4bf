//! The identity strategy.

use super::SearchStrategy;

/// A strategy that performs zero search iterations.
///
/// With this policy the engine returns the initial materialized ordering
/// unchanged, which makes it the right choice when the caller has already
/// ordered the entrants or wants scoring without search.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSearch;

impl<T: Clone> SearchStrategy<T> for NoSearch {
    fn can_continue(&self) -> bool {
        false
    }

    fn next_candidate(&mut self, current: &[T], _current_fitness: f64) -> Vec<T> {
        current.to_vec()
    }
}
