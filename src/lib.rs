//! Stochastic local search for the N-Queens problem.
//!
//! Places N queens on an N×N board so that no two attack each other, using
//! two independent search strategies:
//!
//! - **Simulated Annealing (SA)**: single-solution trajectory search with a
//!   configurable cooling schedule and acceptance rule.
//! - **Genetic Algorithm (GA)**: population-based search with ranked
//!   selection, single-point crossover, and single-position mutation.
//!
//! # Representation
//!
//! A candidate board is a [`board::Board`]: one queen per column, the value
//! at each index giving that queen's row. The objective is the number of
//! attacking pairs ([`Board::conflicts`](board::Board::conflicts)); 0 means
//! a valid solution. Both engines minimize it.
//!
//! # Example
//!
//! ```
//! use nqueens_search::board::random_population;
//! use nqueens_search::ga::{GaConfig, GaRunner};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let population = random_population(200, 8, &mut rng);
//! let config = GaConfig::default().with_seed(7);
//!
//! let result = GaRunner::run(population, &config).unwrap();
//! println!(
//!     "{} conflicts after {} generations",
//!     result.best.conflicts(),
//!     result.generations
//! );
//! ```
//!
//! Engines hold no global state: each run owns its working candidates
//! exclusively and draws randomness from a seedable generator, so repeated
//! trials can be run side by side without coordination.

pub mod board;
pub mod error;
pub mod ga;
pub mod sa;

pub use error::{Error, Result};
