//! Generational genetic algorithm over a bounded quadratic objective.
//!
//! Searches for the integer in `[0, 30]` maximizing `f(x) = -(x^2) + 7x`
//! (clamped at zero) with a classic generational GA: 5-bit binary genomes,
//! roulette-wheel selection, single-point crossover, single-bit-flip
//! mutation, wholesale replacement and optional elitism.
//!
//! # Key Types
//!
//! - [`Genome`]: one candidate solution and its fixed-width binary encoding
//! - [`GaConfig`]: run parameters (rates, elitism, population, generations)
//! - [`Engine`]: executes the evolutionary loop
//! - [`RunResult`]: final statistics plus the per-generation history
//!
//! # Example
//!
//! ```
//! use quadga::{Engine, GaConfig};
//!
//! let config = GaConfig::new(0.9, 0.1, true, 20, 100).with_seed(42);
//! let result = Engine::new(config).unwrap().run();
//! assert_eq!(result.best_fitness, 12); // f(3) = f(4) = 12
//! ```
//!
//! # Determinism
//!
//! A single run-scoped generator drives every random draw, so a seeded
//! [`GaConfig`] makes a run exactly reproducible.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;
pub mod selection;

pub use config::GaConfig;
pub use engine::{Engine, GenerationStats, RunResult};
pub use error::ConfigError;
pub use fitness::fitness;
pub use genome::{Genome, DOMAIN_MAX, GENOME_BITS};
pub use population::Population;
