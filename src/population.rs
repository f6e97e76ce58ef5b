//! Population container and aggregate statistics.

use crate::genome::Genome;
use rand::Rng;

/// An ordered collection of genomes, replaced wholesale each generation.
///
/// The engine owns the current population exclusively; nothing else retains
/// genomes across a generation boundary except the elitist carry-over.
///
/// Statistics operations require a non-empty population. A population size of
/// at least 1 is a construction-time invariant of the run configuration, so
/// an empty population here is a programming error and fails loudly.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<Genome>,
}

impl Population {
    /// Wraps an existing set of genomes.
    pub fn new(members: Vec<Genome>) -> Self {
        Self { members }
    }

    /// Creates `size` genomes with values drawn uniformly from the domain.
    pub fn random<R: Rng>(size: usize, rng: &mut R) -> Self {
        Self {
            members: (0..size).map(|_| Genome::random(rng)).collect(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the population has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over the members in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Genome> {
        self.members.iter()
    }

    /// Returns the member at `index`.
    pub fn get(&self, index: usize) -> Genome {
        self.members[index]
    }

    /// Arithmetic mean of the members' fitness.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn average_fitness(&self) -> f64 {
        assert!(
            !self.members.is_empty(),
            "average_fitness on empty population"
        );
        let total: u64 = self.members.iter().map(|g| u64::from(g.fitness())).sum();
        total as f64 / self.members.len() as f64
    }

    /// The member with maximum fitness, and that fitness.
    ///
    /// Ties break toward the first member in iteration order, so the result
    /// is deterministic for a given population ordering. A linear best-so-far
    /// scan, deliberately independent of genome equality semantics.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn fittest(&self) -> (Genome, u32) {
        assert!(!self.members.is_empty(), "fittest on empty population");
        let mut best = self.members[0];
        let mut best_fitness = best.fitness();
        for &g in &self.members[1..] {
            let f = g.fitness();
            if f > best_fitness {
                best = g;
                best_fitness = f;
            }
        }
        (best, best_fitness)
    }

    /// Sum of all members' fitness, the roulette wheel's total weight.
    pub(crate) fn total_fitness(&self) -> u64 {
        self.members.iter().map(|g| u64::from(g.fitness())).sum()
    }
}

impl From<Vec<Genome>> for Population {
    fn from(members: Vec<Genome>) -> Self {
        Self::new(members)
    }
}
