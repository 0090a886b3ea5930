//! SA execution loop.

use super::config::{Acceptance, CoolingSchedule, SaConfig};
use crate::board::{Board, Candidate};
use crate::error::{Error, Result};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best candidate seen during the run.
    pub best: Candidate,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

/// Executes the Simulated Annealing engine.
pub struct SaRunner;

impl SaRunner {
    /// Anneals from `initial` until the temperature bottoms out.
    ///
    /// The initial board may come from any source as long as it has at
    /// least two columns; [`Board::random`] is the usual supplier.
    pub fn run(initial: Board, config: &SaConfig) -> Result<SaResult> {
        Self::run_with_cancel(initial, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// If `cancel` is set to `true` mid-run, the loop stops at the next
    /// step boundary and returns the best candidate found so far.
    pub fn run_with_cancel(
        initial: Board,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate()?;
        if initial.len() < 2 {
            return Err(Error::BoardTooSmall {
                min: 2,
                got: initial.len(),
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = Candidate::new(initial);
        let mut best = current.clone();

        debug!(
            n = best.board().len(),
            conflicts = best.conflicts(),
            temperature = config.initial_temperature,
            "starting annealing run"
        );

        let mut temperature = config.initial_temperature;
        let mut step = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        while temperature > config.min_temperature {
            if config.max_iterations > 0 && step >= config.max_iterations {
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if let Some(target) = config.target {
                if best.conflicts() <= target {
                    break;
                }
            }

            let neighbor = Candidate::new(current.board().neighbor(&mut rng));

            // Positive delta means the neighbor has fewer conflicts.
            let delta = f64::from(current.conflicts()) - f64::from(neighbor.conflicts());
            let accept = if delta > 0.0 {
                improving_moves += 1;
                true
            } else {
                let boltzmann = (delta / temperature).exp();
                match config.acceptance {
                    Acceptance::Metropolis => rng.random_range(0.0..1.0) < boltzmann,
                    Acceptance::ThresholdAbove(p) => boltzmann > p,
                    Acceptance::ThresholdBelow(p) => boltzmann <= p,
                }
            };

            if accept {
                current = neighbor;
                accepted_moves += 1;
                if current.conflicts() < best.conflicts() {
                    best = current.clone();
                    trace!(step, conflicts = best.conflicts(), "new best");
                }
            }

            step += 1;
            temperature = next_temperature(config, step, temperature);
        }

        debug!(
            iterations = step,
            conflicts = best.conflicts(),
            accepted_moves,
            cancelled,
            "annealing run finished"
        );

        Ok(SaResult {
            best,
            iterations: step,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
        })
    }
}

/// Temperature for the step that follows `step` completed steps.
fn next_temperature(config: &SaConfig, step: usize, current: f64) -> f64 {
    match config.cooling {
        CoolingSchedule::Linear { decrement } => {
            config.initial_temperature - decrement * step as f64
        }
        CoolingSchedule::Geometric { alpha } => current * alpha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn random_board(n: usize, seed: u64) -> Board {
        let mut rng = StdRng::seed_from_u64(seed);
        Board::random(n, &mut rng)
    }

    #[test]
    fn test_cold_start_returns_initial_unchanged() {
        let initial = random_board(8, 1);
        for t0 in [0.0, -10.0] {
            let config = SaConfig::default()
                .with_initial_temperature(t0)
                .with_seed(42);
            let result = SaRunner::run(initial.clone(), &config).unwrap();

            assert_eq!(result.iterations, 0);
            assert_eq!(result.best.board(), &initial);
            assert_eq!(result.accepted_moves, 0);
        }
    }

    #[test]
    fn test_annealing_reduces_conflicts() {
        let initial = random_board(8, 2);
        let start_conflicts = initial.conflicts();
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_cooling(CoolingSchedule::Linear { decrement: 0.001 })
            .with_seed(42);

        let result = SaRunner::run(initial, &config).unwrap();

        // The linear schedule runs for roughly T0 / decrement steps.
        assert!((99_000..=101_000).contains(&result.iterations));
        assert!(result.final_temperature <= 0.0);
        assert!(result.best.conflicts() <= start_conflicts);
        assert!(
            result.best.conflicts() <= 2,
            "expected a near-solution after a full anneal, got {}",
            result.best.conflicts()
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
    }

    #[test]
    fn test_max_iterations_budget() {
        let config = SaConfig::default().with_max_iterations(50).with_seed(42);
        let result = SaRunner::run(random_board(8, 3), &config).unwrap();
        assert!(result.iterations <= 50);
    }

    #[test]
    fn test_target_stops_the_run() {
        // Any random board already meets a huge target, so no steps run.
        let config = SaConfig::default().with_target(1000).with_seed(42);
        let result = SaRunner::run(random_board(8, 4), &config).unwrap();
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_cancellation() {
        // Flag set before the run starts: stops deterministically at the
        // first step boundary.
        let cancel = Arc::new(AtomicBool::new(true));
        let config = SaConfig::default().with_seed(42);
        let result =
            SaRunner::run_with_cancel(random_board(8, 5), &config, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_rejects_tiny_board() {
        let config = SaConfig::default().with_seed(42);
        let err = SaRunner::run(random_board(1, 6), &config).unwrap_err();
        assert!(matches!(err, Error::BoardTooSmall { min: 2, got: 1 }));
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config =
            SaConfig::default().with_cooling(CoolingSchedule::Linear { decrement: -1.0 });
        let err = SaRunner::run(random_board(8, 7), &config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_metropolis_accepts_nearly_everything_when_hot() {
        // At an enormous temperature exp(dE / T) is ~1 for every move, so
        // the walk accepts almost every neighbor.
        let config = SaConfig::default()
            .with_initial_temperature(1e9)
            .with_cooling(CoolingSchedule::Linear { decrement: 1e6 })
            .with_seed(42);

        let result = SaRunner::run(random_board(8, 8), &config).unwrap();

        assert_eq!(result.iterations, 1000);
        assert!(
            result.accepted_moves > 900,
            "expected near-total acceptance at high temperature, got {}",
            result.accepted_moves
        );
    }

    #[test]
    fn test_threshold_directions_disagree_when_hot() {
        // At T ~ 1e9 every non-improving move has exp(dE / T) ~ 1 (dE is
        // bounded below by -28 on an 8-board), which sits above a 0.9
        // threshold and above a 0.0005 one. The two comparison directions
        // must therefore split: ThresholdAbove accepts every single move,
        // ThresholdBelow only the always-accepted improving ones.
        let initial = random_board(8, 9);
        let base = SaConfig::default()
            .with_initial_temperature(1e9)
            .with_max_iterations(1000)
            .with_seed(42);

        let above = SaRunner::run(
            initial.clone(),
            &base.clone().with_acceptance(Acceptance::ThresholdAbove(0.9)),
        )
        .unwrap();
        let below = SaRunner::run(
            initial,
            &base.with_acceptance(Acceptance::ThresholdBelow(0.0005)),
        )
        .unwrap();

        assert_eq!(above.iterations, 1000);
        assert_eq!(above.accepted_moves, above.iterations);

        assert_eq!(below.iterations, 1000);
        assert_eq!(below.accepted_moves, below.improving_moves);
        // Only improving moves change the current board under the inverse
        // rule, and each one strictly lowers a conflict count that starts
        // at 28 or less.
        assert!(below.accepted_moves <= 28);
        assert!(above.accepted_moves > below.accepted_moves);
    }

    #[test]
    fn test_geometric_cooling_terminates_at_floor() {
        let config = SaConfig::default()
            .with_initial_temperature(100.0)
            .with_min_temperature(0.01)
            .with_cooling(CoolingSchedule::Geometric { alpha: 0.95 })
            .with_seed(42);

        let result = SaRunner::run(random_board(8, 10), &config).unwrap();

        assert!(result.final_temperature <= 0.01);
        // log(0.0001) / log(0.95) ~ 180 steps from 100.0 down to 0.01.
        assert!((170..=190).contains(&result.iterations));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let initial = random_board(8, 11);
        let config = SaConfig::default()
            .with_max_iterations(5000)
            .with_seed(99);

        let a = SaRunner::run(initial.clone(), &config).unwrap();
        let b = SaRunner::run(initial, &config).unwrap();

        assert_eq!(a.best.board(), b.best.board());
        assert_eq!(a.accepted_moves, b.accepted_moves);
        assert_eq!(a.iterations, b.iterations);
    }
}
