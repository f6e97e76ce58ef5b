//! Fitness evaluation.
//!
//! The objective is the fixed quadratic `f(x) = -(x^2) + 7x`, clamped at
//! zero. It peaks at `f(3) = f(4) = 12`; a correctly functioning run
//! converges there. Fitness is derived on demand from a genome's value and
//! never stored, so there is no stale score to invalidate.

use crate::genome::Genome;

/// Computes `max(0, -(x^2) + 7x)`.
///
/// Pure and side-effect free. The clamp keeps the roulette wheel's weighted
/// sum well-defined for every value the operators can produce.
pub fn fitness(x: u32) -> u32 {
    let x = i64::from(x);
    (-(x * x) + 7 * x).max(0) as u32
}

impl Genome {
    /// Fitness of this genome; an invalid genome scores zero so it is
    /// naturally selected against rather than crashing the weighted draw.
    pub fn fitness(&self) -> u32 {
        self.value().map_or(0, fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::DOMAIN_MAX;

    #[test]
    fn test_fitness_table() {
        assert_eq!(fitness(0), 0);
        assert_eq!(fitness(3), 12);
        assert_eq!(fitness(4), 12);
        assert_eq!(fitness(7), 0);
        assert_eq!(fitness(30), 0);
    }

    #[test]
    fn test_fitness_matches_clamped_quadratic() {
        for x in 0..=DOMAIN_MAX {
            let raw = -(x as i64 * x as i64) + 7 * x as i64;
            assert_eq!(fitness(x) as i64, raw.max(0), "mismatch at x = {x}");
        }
    }

    #[test]
    fn test_maximum_is_at_3_and_4() {
        let best = (0..=DOMAIN_MAX).map(fitness).max().unwrap();
        assert_eq!(best, 12);
        for x in 0..=DOMAIN_MAX {
            if fitness(x) == best {
                assert!(x == 3 || x == 4);
            }
        }
    }

    #[test]
    fn test_invalid_genome_scores_zero() {
        assert_eq!(Genome::Invalid.fitness(), 0);
        assert_eq!(Genome::Valid(3).fitness(), 12);
    }
}
