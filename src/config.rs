//! Run configuration.
//!
//! [`GaConfig`] holds every parameter that controls the evolutionary loop.
//! All core parameters are required at construction and read-only for the
//! run's duration; only the seed is optional.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one GA run.
///
/// # Examples
///
/// ```
/// use quadga::GaConfig;
///
/// let config = GaConfig::new(0.9, 0.05, true, 20, 50).with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the offspring is a copy of parent1.
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether the current fittest genome is carried unchanged into the
    /// next generation's first slot.
    pub elitism: bool,

    /// Number of genomes in the population. Must be at least 1.
    pub population_size: usize,

    /// Number of generations to run. Zero is legal: the run reports
    /// statistics on the initial random population only.
    pub generations: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a configuration from the five required run parameters.
    pub fn new(
        crossover_rate: f64,
        mutation_rate: f64,
        elitism: bool,
        population_size: usize,
        generations: usize,
    ) -> Self {
        Self {
            crossover_rate,
            mutation_rate,
            elitism,
            population_size,
            generations,
            seed: None,
        }
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RateOutOfRange { name, value });
            }
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        Ok(())
    }
}
