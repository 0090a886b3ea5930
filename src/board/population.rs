//! Candidates and population helpers.

use super::state::Board;
use rand::Rng;

/// A board paired with its conflict count.
///
/// The count is computed once at construction and cached; fields are
/// private so the cache can never disagree with the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    board: Board,
    conflicts: u32,
}

impl Candidate {
    /// Evaluates `board` and wraps it with the resulting conflict count.
    pub fn new(board: Board) -> Self {
        let conflicts = board.conflicts();
        Self { board, conflicts }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cached attacking-pairs count. Lower is better, 0 is a solution.
    pub fn conflicts(&self) -> u32 {
        self.conflicts
    }

    pub fn is_solution(&self) -> bool {
        self.conflicts == 0
    }

    /// Unwraps the underlying board.
    pub fn into_board(self) -> Board {
        self.board
    }
}

/// Creates `size` independent uniformly-random candidates of `n` columns.
pub fn random_population<R: Rng>(size: usize, n: usize, rng: &mut R) -> Vec<Candidate> {
    (0..size)
        .map(|_| Candidate::new(Board::random(n, rng)))
        .collect()
}

/// Orders a population best-first (ascending conflicts) and returns the new
/// ordering.
///
/// The sort is stable, so candidates with equal conflicts keep their
/// relative order and re-ranking a ranked population is a no-op. Consuming
/// and returning the vector keeps each generation an immutable snapshot.
pub fn rank(mut population: Vec<Candidate>) -> Vec<Candidate> {
    population.sort_by_key(Candidate::conflicts);
    population
}
