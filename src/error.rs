//! Error types for run configuration.
//!
//! Operator-level failures are not errors: they surface as
//! [`Genome::Invalid`](crate::genome::Genome::Invalid) and are handled by
//! selection pressure. The only fallible surface is configuration, checked
//! once at engine construction.

use thiserror::Error;

/// A construction-time configuration parameter is out of range.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A probability parameter is outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The population must hold at least one genome.
    #[error("population_size must be at least 1")]
    EmptyPopulation,
}
