//! Tournament bracket seeding as a combinatorial optimization problem.
//!
//! Assigns a set of competitive entrants to ordered bracket slots so that
//! the first-round matchups (positions `2i` and `2i+1`) are maximally fair
//! across one or more criteria:
//!
//! - **Fitness comparators**: pure, commutative pair-scoring functions on a
//!   normalized `[0, 1]` scale.
//! - **Seed dimensions**: one axis of comparison each, binding a weight, a
//!   projection from entrant to property value, a pairwise combinator, and
//!   a comparator.
//! - **Search strategies**: pluggable optimization policies that propose
//!   candidate orderings and decide when to stop. A simulated-annealing
//!   default is provided, along with the identity strategy.
//! - **Seeding engine**: aggregates pairwise fitness across dimensions and
//!   drives the injected strategy until it terminates.
//!
//! # Architecture
//!
//! This is an embeddable scoring-and-search library. It owns no
//! persistence, no UI, and no tournament-tree management beyond a flat
//! ordered entrant list; bracket construction, geocoding backends, and
//! multi-round propagation are defined by consumers at higher layers.

pub mod builtin;
pub mod dimension;
pub mod entrant;
pub mod error;
pub mod geography;
pub mod seeding;
pub mod strategy;
