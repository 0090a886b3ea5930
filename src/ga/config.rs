//! GA configuration.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm engine.
///
/// # Defaults
///
/// ```
/// use nqueens_search::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.max_generations, 500);
/// assert!((config.mutation_rate - 0.1).abs() < 1e-10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_search::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_selection(Selection::Truncation(0.39))
///     .with_mutation_rate(0.05)
///     .with_max_generations(1000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// How parents are drawn from the ranked population.
    pub selection: Selection,

    /// Probability of mutating each child with a single-position random
    /// move (0.0–1.0).
    pub mutation_rate: f64,

    /// Maximum number of generations before giving up and returning the
    /// best candidate found.
    pub max_generations: usize,

    /// Random seed for reproducibility. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            mutation_rate: 0.1,
            max_generations: 500,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the mutation rate, clamped to [0, 1].
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_generations == 0 {
            return Err(Error::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfig(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        match self.selection {
            Selection::Truncation(ratio) => {
                if !(ratio > 0.0 && ratio <= 1.0) {
                    return Err(Error::InvalidConfig(format!(
                        "truncation ratio must be in (0, 1], got {ratio}"
                    )));
                }
            }
            Selection::Tournament(k) => {
                if k == 0 {
                    return Err(Error::InvalidConfig(
                        "tournament size must be at least 1".into(),
                    ));
                }
            }
            Selection::Uniform => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.selection, Selection::Truncation(0.35));
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.max_generations, 500);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_selection(Selection::Uniform)
            .with_mutation_rate(0.3)
            .with_max_generations(1000)
            .with_seed(42);

        assert_eq!(config.selection, Selection::Uniform);
        assert!((config.mutation_rate - 0.3).abs() < 1e-10);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_mutation_rate_is_clamped() {
        assert!((GaConfig::default().with_mutation_rate(2.0).mutation_rate - 1.0).abs() < 1e-10);
        assert!((GaConfig::default().with_mutation_rate(-0.5).mutation_rate - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default()
            .with_max_generations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_truncation_ratio() {
        for ratio in [0.0, -0.2, 1.5] {
            let config = GaConfig::default().with_selection(Selection::Truncation(ratio));
            assert!(config.validate().is_err(), "ratio {ratio} should be rejected");
        }
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default()
            .with_selection(Selection::Tournament(0))
            .validate()
            .is_err());
    }
}
