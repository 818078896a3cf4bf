//! Pluggable search strategies.
//!
//! Seeding N entrants into matched pairs that maximize aggregate fitness
//! is a combinatorial optimization over a factorial search space, so the
//! engine delegates all exploration policy to a [`SearchStrategy`]:
//!
//! - [`NoSearch`]: the identity policy, zero search iterations.
//! - [`AnnealingSearch`]: simulated annealing with geometric cooling and
//!   Metropolis acceptance, the recommended default.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod annealing;
mod noop;
mod types;

pub use annealing::{AnnealingConfig, AnnealingSearch};
pub use noop::NoSearch;
pub use types::SearchStrategy;
