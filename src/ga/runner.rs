//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives the cycle: rank → select parents → crossover →
//! mutate → evaluate → replace, until a solution appears or the generation
//! cap is reached.

use super::config::GaConfig;
use crate::board::{rank, Candidate};
use crate::error::{Error, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best candidate seen across all generations.
    pub best: Candidate,

    /// Number of full replacement cycles executed.
    ///
    /// 0 when the initial population already contained a top-ranked
    /// solution.
    pub generations: usize,

    /// Whether `best` is a zero-conflict solution.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best conflict count after the initial ranking and after each
    /// generation. Non-increasing, since the best candidate is tracked
    /// across replacements.
    pub conflict_history: Vec<u32>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use nqueens_search::board::random_population;
/// use nqueens_search::ga::{GaConfig, GaRunner};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let population = random_population(200, 8, &mut rng);
/// let result = GaRunner::run(population, &GaConfig::default().with_seed(42)).unwrap();
/// assert!(result.best.conflicts() <= 1);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Evolves `population` until a solution appears or the generation cap
    /// is reached, returning the best candidate found either way.
    ///
    /// The population may come from any source; it must be non-empty, all
    /// boards must share one length, and that length must be at least 2 so
    /// a crossover point exists. Population size stays fixed across
    /// generations, and each generation replaces the previous one wholesale
    /// (no elitism).
    pub fn run(population: Vec<Candidate>, config: &GaConfig) -> Result<GaResult> {
        Self::run_with_cancel(population, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is set to `true` mid-run, the loop stops at the next
    /// generation boundary and returns the best candidate found so far.
    pub fn run_with_cancel(
        population: Vec<Candidate>,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;
        validate_population(&population)?;
        let pool = config.selection.pool_size(population.len())?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut ranked = rank(population);
        let mut best = ranked[0].clone();
        let mut conflict_history = vec![best.conflicts()];
        let mut generations = 0usize;
        let mut cancelled = false;

        debug!(
            population = ranked.len(),
            n = best.board().len(),
            conflicts = best.conflicts(),
            "starting evolution"
        );

        while !ranked[0].is_solution() && generations < config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut next = Vec::with_capacity(ranked.len());
            for _ in 0..ranked.len() {
                // Parents are independent draws; selecting the same
                // candidate twice is legal and yields a clone (modulo
                // mutation).
                let x = &ranked[config.selection.select(pool, &mut rng)];
                let y = &ranked[config.selection.select(pool, &mut rng)];

                let mut child = x.board().crossover(y.board(), &mut rng)?;
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    child = child.neighbor(&mut rng);
                }
                next.push(Candidate::new(child));
            }

            ranked = rank(next);
            generations += 1;

            if ranked[0].conflicts() < best.conflicts() {
                best = ranked[0].clone();
            }
            conflict_history.push(best.conflicts());
            trace!(generations, conflicts = best.conflicts(), "generation complete");
        }

        let solved = best.is_solution();
        debug!(generations, conflicts = best.conflicts(), solved, cancelled, "evolution finished");

        Ok(GaResult {
            best,
            generations,
            solved,
            cancelled,
            conflict_history,
        })
    }
}

fn validate_population(population: &[Candidate]) -> Result<()> {
    let first = population.first().ok_or(Error::EmptyPopulation)?;
    let n = first.board().len();
    if n < 2 {
        return Err(Error::BoardTooSmall { min: 2, got: n });
    }
    for candidate in population {
        if candidate.board().len() != n {
            return Err(Error::LengthMismatch {
                left: n,
                right: candidate.board().len(),
            });
        }
    }
    Ok(())
}
