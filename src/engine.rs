//! The generational evolutionary loop.
//!
//! [`Engine`] orchestrates one full run: initialization → selection →
//! crossover → mutation → wholesale replacement, for a fixed number of
//! generations, with optional elitist carry-over. Per-generation statistics
//! are logged as they are produced and collected into the final
//! [`RunResult`].

use crate::config::GaConfig;
use crate::error::ConfigError;
use crate::genome::Genome;
use crate::operators;
use crate::population::Population;
use crate::selection;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics of one population snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    /// Generation index, 0-based.
    pub generation: usize,
    /// Arithmetic mean fitness of the population.
    pub average_fitness: f64,
    /// Fitness of the fittest member.
    pub best_fitness: u32,
    /// The fittest member itself.
    pub best: Genome,
}

/// Result of a complete run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult {
    /// The fittest genome of the final population.
    pub best: Genome,
    /// Fitness of that genome.
    pub best_fitness: u32,
    /// Mean fitness of the final population.
    pub average_fitness: f64,
    /// Number of generations executed.
    pub generations: usize,
    /// Statistics snapshot after each generation's replacement.
    ///
    /// Empty when the run was configured with zero generations; the final
    /// fields above then describe the initial random population.
    pub history: Vec<GenerationStats>,
}

/// Executes the generational GA.
///
/// The engine owns the current population exclusively; genomes never cross
/// a generation boundary except through the elitist copy.
///
/// # Usage
///
/// ```
/// use quadga::{Engine, GaConfig};
///
/// let config = GaConfig::new(0.9, 0.1, true, 20, 50).with_seed(42);
/// let result = Engine::new(config).unwrap().run();
/// assert_eq!(result.generations, 50);
/// ```
pub struct Engine {
    config: GaConfig,
}

impl Engine {
    /// Creates an engine, validating the configuration up front.
    pub fn new(config: GaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs the full simulation and returns the collected statistics.
    ///
    /// One seedable generator drives every random draw of the run (initial
    /// population, selection, operator probabilities, cut points and bit
    /// positions), so a seeded configuration reproduces exactly.
    pub fn run(&self) -> RunResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population = Population::random(self.config.population_size, &mut rng);
        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 0..self.config.generations {
            population = self.next_generation(&population, &mut rng);

            let stats = snapshot(generation, &population);
            info!(
                "generation {}: avg fitness {:.3}, best fitness {}, best individual {}",
                stats.generation, stats.average_fitness, stats.best_fitness, stats.best
            );
            history.push(stats);
        }

        let (best, best_fitness) = population.fittest();
        let average_fitness = population.average_fitness();
        info!(
            "run complete after {} generations: avg fitness {:.3}, best fitness {}, best individual {}",
            self.config.generations, average_fitness, best_fitness, best
        );

        RunResult {
            best,
            best_fitness,
            average_fitness,
            generations: self.config.generations,
            history,
        }
    }

    /// Builds the successor population from `current`.
    fn next_generation<R: Rng>(&self, current: &Population, rng: &mut R) -> Population {
        let mut next = Vec::with_capacity(self.config.population_size);

        // Elitist carry-over occupies the first slot unchanged.
        if self.config.elitism {
            next.push(current.fittest().0);
        }

        while next.len() < self.config.population_size {
            let parent1 = current.get(selection::roulette(current, rng));
            let parent2 = current.get(selection::roulette(current, rng));

            let mut offspring = if rng.random_range(0.0..1.0) < self.config.crossover_rate {
                operators::crossover(&parent1, &parent2, rng)
            } else {
                parent1
            };

            if rng.random_range(0.0..1.0) < self.config.mutation_rate {
                offspring = operators::mutate(&offspring, rng);
            }

            next.push(offspring);
        }

        Population::new(next)
    }
}

fn snapshot(generation: usize, population: &Population) -> GenerationStats {
    let (best, best_fitness) = population.fittest();
    GenerationStats {
        generation,
        average_fitness: population.average_fitness(),
        best_fitness,
        best,
    }
}
