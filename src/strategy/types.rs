//! Core trait for search strategies.

/// A pluggable optimization policy over candidate orderings.
///
/// The engine drives the strategy in a plain loop: while
/// [`can_continue`](SearchStrategy::can_continue) holds, it passes the
/// last proposed ordering together with its freshly computed fitness back
/// into [`next_candidate`](SearchStrategy::next_candidate) and evaluates
/// whatever comes out. The engine never imposes an iteration bound;
/// termination is entirely the strategy's responsibility, so
/// `can_continue` must eventually return `false`.
///
/// Policy state that evolves between calls (a cooling temperature, RNG
/// state, a tabu list) is the strategy's private concern, invisible to the
/// engine; `&mut self` keeps that state exclusively owned by one search.
/// A caller-supplied strategy may also thread an external cancellation or
/// timeout signal through `can_continue` to abort long searches.
pub trait SearchStrategy<T>: Send {
    /// Whether another search iteration should be attempted.
    fn can_continue(&self) -> bool;

    /// Proposes the next candidate ordering to evaluate, given the
    /// previous proposal and its aggregate fitness.
    fn next_candidate(&mut self, current: &[T], current_fitness: f64) -> Vec<T>;
}
