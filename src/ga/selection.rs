//! Parent selection over a ranked population.
//!
//! All strategies operate on a population already ordered best-first by
//! [`rank`](crate::board::rank) and return the index of the chosen parent.

use crate::error::{Error, Result};
use rand::Rng;

/// Strategy for drawing parents from the ranked population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Truncation selection: parents are drawn uniformly from the top
    /// fraction of the ranked population.
    ///
    /// The ratio is in (0, 1]; a pool that rounds down to zero candidates
    /// is rejected as an invalid configuration before the run starts.
    Truncation(f64),

    /// Every candidate is an eligible parent, drawn uniformly.
    ///
    /// Equivalent to `Truncation(1.0)`; selection pressure then comes only
    /// from ranking and replacement.
    Uniform,

    /// Tournament selection: the best of `k` uniform draws.
    ///
    /// On a ranked population the best of a tournament is simply the
    /// lowest drawn index. Higher `k` = stronger selection pressure.
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Truncation(0.35)
    }
}

impl Selection {
    /// Number of top-ranked candidates eligible as parents.
    pub fn pool_size(&self, population_len: usize) -> Result<usize> {
        match *self {
            Selection::Truncation(ratio) => {
                let pool = (population_len as f64 * ratio) as usize;
                if pool == 0 {
                    return Err(Error::InvalidConfig(format!(
                        "selection pool is empty: ratio {ratio} of {population_len} candidates rounds to zero"
                    )));
                }
                Ok(pool)
            }
            Selection::Uniform | Selection::Tournament(_) => Ok(population_len),
        }
    }

    /// Draws one parent index from a pool of `pool` ranked candidates.
    ///
    /// `pool` must be the value returned by [`pool_size`](Self::pool_size)
    /// for the same population.
    pub fn select<R: Rng>(&self, pool: usize, rng: &mut R) -> usize {
        match *self {
            Selection::Truncation(_) | Selection::Uniform => rng.random_range(0..pool),
            Selection::Tournament(k) => (0..k.max(1))
                .map(|_| rng.random_range(0..pool))
                .min()
                .unwrap_or(0),
        }
    }
}
