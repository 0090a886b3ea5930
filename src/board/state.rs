//! Board representation and move operators.

use crate::error::{Error, Result};
use rand::Rng;
use std::fmt;

/// One candidate arrangement of N queens.
///
/// Index = column, value = row of the queen in that column. Row values are
/// otherwise unconstrained: two queens sharing a row is exactly what
/// [`conflicts`](Board::conflicts) measures, not an invariant violation.
///
/// A `Board` is an immutable value. Every move operator returns a new board
/// and leaves the input untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    rows: Vec<usize>,
}

impl Board {
    /// Creates a uniformly random board of `n` columns.
    ///
    /// Each row is drawn independently and uniformly from `[0, n)`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let rows = (0..n).map(|_| rng.random_range(0..n)).collect();
        Self { rows }
    }

    /// Builds a board from explicit row assignments.
    ///
    /// Fails if any row value is outside `[0, rows.len())`.
    pub fn from_rows(rows: Vec<usize>) -> Result<Self> {
        let size = rows.len();
        if let Some(&row) = rows.iter().find(|&&row| row >= size) {
            return Err(Error::RowOutOfRange { row, size });
        }
        Ok(Self { rows })
    }

    /// Number of columns (and queens).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row assignment per column.
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Counts attacking pairs: unordered pairs `(i, j)`, `i < j`, sharing a
    /// row or a diagonal.
    ///
    /// This is the sole objective function for both engines; lower is
    /// better and 0 is a solution. O(N²), deterministic. Empty and
    /// singleton boards trivially have 0 conflicts.
    pub fn conflicts(&self) -> u32 {
        let mut attacking = 0;
        for i in 0..self.rows.len() {
            for j in (i + 1)..self.rows.len() {
                let (a, b) = (self.rows[i], self.rows[j]);
                if a == b || a.abs_diff(b) == j - i {
                    attacking += 1;
                }
            }
        }
        attacking
    }

    /// Returns a copy of this board with one uniformly-chosen column
    /// reassigned to a fresh uniformly-random row.
    ///
    /// The column and row draws are independent, so the new row may equal
    /// the old one; callers must tolerate no-op moves rather than filter
    /// them. This is the SA step and the GA mutation operator.
    ///
    /// # Panics
    ///
    /// Panics on an empty board (there is no column to move).
    pub fn neighbor<R: Rng>(&self, rng: &mut R) -> Self {
        assert!(!self.rows.is_empty(), "cannot mutate an empty board");
        let mut rows = self.rows.clone();
        let column = rng.random_range(0..rows.len());
        rows[column] = rng.random_range(0..rows.len());
        Self { rows }
    }

    /// Single-point crossover: the child takes this board's prefix
    /// `[0, point)` and `other`'s suffix `[point, N)`, with the point drawn
    /// uniformly from `[1, N-1]`.
    ///
    /// Asymmetric: swapping the receivers generally yields a different
    /// child. Requires equal lengths and at least two columns, so a point
    /// strictly between 0 and N exists.
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self> {
        if self.rows.len() != other.rows.len() {
            return Err(Error::LengthMismatch {
                left: self.rows.len(),
                right: other.rows.len(),
            });
        }
        if self.rows.len() < 2 {
            return Err(Error::BoardTooSmall {
                min: 2,
                got: self.rows.len(),
            });
        }

        let point = rng.random_range(1..self.rows.len());
        let mut rows = self.rows[..point].to_vec();
        rows.extend_from_slice(&other.rows[point..]);
        Ok(Self { rows })
    }
}

/// ASCII rendering of the board, highest row first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows.len()).rev() {
            for &queen_row in &self.rows {
                f.write_str(if queen_row == row { " Q " } else { " . " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
