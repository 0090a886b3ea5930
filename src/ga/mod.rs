//! Genetic Algorithm engine.
//!
//! Population-based search: each generation the ranked population breeds a
//! full replacement population via single-point crossover of parents drawn
//! from a selection pool, with single-position mutation applied at a
//! configured rate.
//!
//! # Key Types
//!
//! - [`GaConfig`]: selection strategy, mutation rate, generation cap
//! - [`Selection`]: how parents are drawn from the ranked population
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: best candidate, generations consumed, statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

mod config;
mod runner;
mod selection;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
