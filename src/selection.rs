//! Roulette-wheel (fitness-proportionate) parent selection.
//!
//! Probability of selection is proportional to a member's share of the
//! population's total fitness. Selection is side-effect free and is invoked
//! twice per offspring; each call re-evaluates the full weighted draw, so
//! the same parent can be picked for both slots.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::population::Population;
use rand::Rng;

/// Selects one parent index by roulette wheel.
///
/// Computes the cumulative fitness sum `S`, draws a uniform integer in
/// `[0, S)`, then walks the population accumulating partial sums until the
/// partial sum reaches the draw.
///
/// When `S == 0` (every member has zero fitness) the weighted draw is
/// undefined; the explicit fallback is a uniformly random member. Guarding
/// this here keeps the degenerate all-zero population from ever reaching an
/// empty random range.
///
/// # Panics
/// Panics if `population` is empty.
pub fn roulette<R: Rng>(population: &Population, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let total = population.total_fitness();
    if total == 0 {
        return rng.random_range(0..population.len());
    }

    let draw = rng.random_range(0..total);
    let mut partial = 0u64;
    for (i, g) in population.iter().enumerate() {
        partial += u64::from(g.fitness());
        if partial >= draw {
            return i;
        }
    }

    // Unreachable: partial == total > draw after the last member.
    population.len() - 1
}
