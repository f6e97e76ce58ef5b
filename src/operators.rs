//! Variation operators on the fixed-width binary encoding.
//!
//! Single-point crossover and single-bit-flip mutation. Both operators work
//! on the genome's encoded form, so every participant shares the same
//! [`GENOME_BITS`](crate::genome::GENOME_BITS) width.
//!
//! Failure policy: an operator that cannot encode or decode its operands
//! returns [`Genome::Invalid`] instead of propagating a fault. The invalid
//! offspring enters the next generation with zero fitness and is selected
//! against; the loop never needs a retry path.

use crate::genome::{Genome, GENOME_BITS};
use rand::Rng;

/// Single-point crossover.
///
/// Picks a uniformly random cut in `[1, GENOME_BITS - 1]` and splices
/// `parent1`'s prefix onto `parent2`'s suffix. The cut range excludes the
/// string ends so both parents always contribute at least one bit.
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Genome {
    let cut = rng.random_range(1..GENOME_BITS);
    crossover_at(parent1, parent2, cut)
}

/// Crossover with an explicit cut point.
pub fn crossover_at(parent1: &Genome, parent2: &Genome, cut: usize) -> Genome {
    let (Some(bits1), Some(bits2)) = (parent1.encode(), parent2.encode()) else {
        return Genome::Invalid;
    };
    Genome::decode(&format!("{}{}", &bits1[..cut], &bits2[cut..]))
}

/// Single-bit-flip mutation.
///
/// Flips one uniformly random bit of the encoding. Always succeeds for a
/// well-formed genome; an invalid genome stays invalid.
pub fn mutate<R: Rng>(genome: &Genome, rng: &mut R) -> Genome {
    let position = rng.random_range(0..GENOME_BITS);
    mutate_at(genome, position)
}

/// Mutation with an explicit bit position.
pub fn mutate_at(genome: &Genome, position: usize) -> Genome {
    let Some(bits) = genome.encode() else {
        return Genome::Invalid;
    };
    let flipped: String = bits
        .chars()
        .enumerate()
        .map(|(i, c)| if i == position { if c == '0' { '1' } else { '0' } } else { c })
        .collect();
    Genome::decode(&flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_crossover_known_cut() {
        // "00101" x "10100" at cut 3 -> "001" + "00" = "00100" = 4
        let child = crossover_at(&Genome::Valid(5), &Genome::Valid(20), 3);
        assert_eq!(child, Genome::Valid(4));
    }

    #[test]
    fn test_crossover_identical_parents_is_identity() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let child = crossover(&Genome::Valid(13), &Genome::Valid(13), &mut rng);
            assert_eq!(child, Genome::Valid(13));
        }
    }

    #[test]
    fn test_crossover_invalid_parent_yields_invalid() {
        assert_eq!(crossover_at(&Genome::Invalid, &Genome::Valid(5), 2), Genome::Invalid);
        assert_eq!(crossover_at(&Genome::Valid(5), &Genome::Invalid, 2), Genome::Invalid);
    }

    #[test]
    fn test_crossover_stays_in_encoded_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p1 = Genome::random(&mut rng);
            let p2 = Genome::random(&mut rng);
            let child = crossover(&p1, &p2, &mut rng);
            let v = child.value().expect("valid parents produce valid child");
            assert!(v < 32);
        }
    }

    #[test]
    fn test_mutate_invalid_stays_invalid() {
        assert_eq!(mutate_at(&Genome::Invalid, 0), Genome::Invalid);
    }

    proptest! {
        #[test]
        fn prop_mutation_flips_exactly_one_bit(v in 0u32..32, position in 0usize..GENOME_BITS) {
            let g = Genome::Valid(v);
            let mutated = mutate_at(&g, position);
            let w = mutated.value().unwrap();
            // Exactly one bit differs, and it is the requested one.
            prop_assert_eq!(v ^ w, 1 << (GENOME_BITS - 1 - position));
        }

        #[test]
        fn prop_mutation_is_involutive(v in 0u32..32, position in 0usize..GENOME_BITS) {
            let g = Genome::Valid(v);
            prop_assert_eq!(mutate_at(&mutate_at(&g, position), position), g);
        }

        #[test]
        fn prop_crossover_splices_prefix_and_suffix(
            a in 0u32..32,
            b in 0u32..32,
            cut in 1usize..GENOME_BITS,
        ) {
            let child = crossover_at(&Genome::Valid(a), &Genome::Valid(b), cut);
            let bits_a = Genome::Valid(a).encode().unwrap();
            let bits_b = Genome::Valid(b).encode().unwrap();
            let expected = Genome::decode(&format!("{}{}", &bits_a[..cut], &bits_b[cut..]));
            prop_assert_eq!(child, expected);
            prop_assert!(child.value().is_some());
        }
    }
}
