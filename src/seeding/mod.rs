//! Seeding configuration and the optimization engine.
//!
//! A [`Seeding`] is assembled once per seeding invocation from dimensions
//! and one search strategy, validated at build time, and then drives the
//! strategy over candidate orderings until it terminates.

mod config;
mod engine;

pub use config::SeedingBuilder;
pub use engine::Seeding;
