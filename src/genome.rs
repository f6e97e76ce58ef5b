//! Genome representation and fixed-width binary encoding.
//!
//! A genome is one candidate solution: a non-negative integer drawn from
//! `[0, DOMAIN_MAX]`, manipulated by the variation operators through its
//! fixed-width binary string form.
//!
//! Operators that fail (a corrupt bit string, a value outside the encodable
//! range) produce [`Genome::Invalid`] rather than an error. An invalid genome
//! scores zero fitness and is weeded out by selection pressure over the next
//! generations, so no recovery logic exists anywhere downstream.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound of the search domain (inclusive).
pub const DOMAIN_MAX: u32 = 30;

/// Width of the binary encoding, fixed for the whole run.
///
/// Five bits cover `[0, 31]`, which is the smallest width containing
/// `[0, DOMAIN_MAX]`. Crossover and mutation can produce 31; it is a legal
/// genome that simply scores zero.
pub const GENOME_BITS: usize = 5;

/// One candidate solution.
///
/// `Invalid` is the tagged replacement for a magic negative sentinel: it is
/// what every failed operator returns, and it participates in the next
/// generation as a zero-fitness individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Genome {
    /// A well-formed candidate holding its integer value.
    Valid(u32),
    /// Produced when an operator fails; fitness is always zero.
    Invalid,
}

impl std::fmt::Display for Genome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genome::Valid(v) => write!(f, "{v}"),
            Genome::Invalid => write!(f, "invalid"),
        }
    }
}

impl Genome {
    /// Creates a genome with a value drawn uniformly from `[0, DOMAIN_MAX]`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Genome::Valid(rng.random_range(0..=DOMAIN_MAX))
    }

    /// Returns the integer value, or `None` for an invalid genome.
    pub fn value(&self) -> Option<u32> {
        match self {
            Genome::Valid(v) => Some(*v),
            Genome::Invalid => None,
        }
    }

    /// Encodes the genome as a zero-padded binary string of [`GENOME_BITS`]
    /// characters.
    ///
    /// Returns `None` for an invalid genome or a value that does not fit in
    /// the fixed width. Truncating would silently corrupt the search space,
    /// so an unrepresentable value is refused instead.
    pub fn encode(&self) -> Option<String> {
        match self {
            Genome::Valid(v) if *v < (1 << GENOME_BITS) => {
                Some(format!("{v:0width$b}", width = GENOME_BITS))
            }
            _ => None,
        }
    }

    /// Parses a binary string back into a genome.
    ///
    /// Any character other than '0' or '1', or an empty string, yields
    /// [`Genome::Invalid`]. This is the local recovery for the invalid
    /// encoding condition; it never surfaces as an error.
    pub fn decode(bits: &str) -> Self {
        if bits.is_empty() || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Genome::Invalid;
        }
        u32::from_str_radix(bits, 2).map_or(Genome::Invalid, Genome::Valid)
    }
}
