//! N-Queens problem domain.
//!
//! The board representation shared by both search engines, together with the
//! operators they are built from:
//!
//! - [`Board`]: one candidate arrangement, one queen per column
//! - [`Board::conflicts`]: the objective function (attacking pairs)
//! - [`Board::neighbor`]: single-position random move (SA step, GA mutation)
//! - [`Board::crossover`]: single-point recombination of two boards
//! - [`Candidate`]: a board with its conflict count cached
//! - [`rank`]: stable best-first ordering of a population

mod population;
mod state;

pub use population::{random_population, rank, Candidate};
pub use state::Board;
