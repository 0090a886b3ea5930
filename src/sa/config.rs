//! SA configuration: cooling schedules and acceptance rules.

use crate::error::{Error, Result};

/// Cooling schedule for temperature reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Linear cooling: `T(t) = T_0 - decrement * t` for step index `t`.
    ///
    /// Reaches zero after `T_0 / decrement` steps, which bounds the run
    /// even without an iteration budget.
    Linear {
        /// Temperature lost per step. Must be positive.
        decrement: f64,
    },

    /// Geometric (exponential) cooling: `T_{t+1} = alpha * T_t`.
    ///
    /// Never reaches zero, so it requires a positive
    /// [`min_temperature`](SaConfig::min_temperature) or an iteration
    /// budget to terminate. Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Linear { decrement: 0.01 }
    }
}

/// Rule deciding whether a non-improving neighbor is accepted.
///
/// All rules apply to the Boltzmann value `exp(dE / T)` where
/// `dE = conflicts(current) - conflicts(neighbor)` is zero or negative for
/// a non-improving move (improving moves are always accepted).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Acceptance {
    /// Classic Metropolis criterion: accept with probability `exp(dE / T)`,
    /// sampled against a uniform [0, 1) draw.
    Metropolis,

    /// Accept when `exp(dE / T)` exceeds the fixed threshold.
    ///
    /// Admits worsening moves while the temperature is still high enough
    /// to keep the Boltzmann value above the threshold.
    ThresholdAbove(f64),

    /// Accept when `exp(dE / T)` is at most the fixed threshold.
    ///
    /// The inverse comparison: worsening moves pass only once the
    /// temperature has dropped far enough to push the value under the
    /// threshold.
    ThresholdBelow(f64),
}

impl Default for Acceptance {
    fn default() -> Self {
        Acceptance::Metropolis
    }
}

/// Configuration for the Simulated Annealing engine.
///
/// # Examples
///
/// ```
/// use nqueens_search::sa::{Acceptance, CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling(CoolingSchedule::Linear { decrement: 0.005 })
///     .with_acceptance(Acceptance::Metropolis)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature. Higher values allow more exploration.
    ///
    /// A value at or below [`min_temperature`](Self::min_temperature) makes
    /// the run a no-op that returns the initial board after zero steps.
    pub initial_temperature: f64,

    /// The engine stops once the temperature drops to this value or below.
    ///
    /// Defaults to 0.0, so the linear schedule runs until `T <= 0`.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Acceptance rule for non-improving moves.
    pub acceptance: Acceptance,

    /// Maximum number of neighbor evaluations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Optional early exit: stop once the best conflict count reaches this
    /// value or below. `None` (the default) anneals the full schedule.
    pub target: Option<u32>,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 0.0,
            cooling: CoolingSchedule::default(),
            acceptance: Acceptance::default(),
            max_iterations: 0,
            target: None,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_target(mut self, conflicts: u32) -> Self {
        self.target = Some(conflicts);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.min_temperature < 0.0 {
            return Err(Error::InvalidConfig(
                "min_temperature must be non-negative".into(),
            ));
        }
        match self.cooling {
            CoolingSchedule::Linear { decrement } => {
                if decrement <= 0.0 {
                    return Err(Error::InvalidConfig(format!(
                        "linear decrement must be positive, got {decrement}"
                    )));
                }
            }
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(Error::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
                if self.min_temperature == 0.0 && self.max_iterations == 0 {
                    return Err(Error::InvalidConfig(
                        "geometric cooling never reaches zero; set min_temperature or max_iterations".into(),
                    ));
                }
            }
        }
        match self.acceptance {
            Acceptance::ThresholdAbove(p) | Acceptance::ThresholdBelow(p) => {
                if !(0.0..=1.0).contains(&p) {
                    return Err(Error::InvalidConfig(format!(
                        "acceptance threshold must be in [0, 1], got {p}"
                    )));
                }
            }
            Acceptance::Metropolis => {}
        }
        Ok(())
    }
}
