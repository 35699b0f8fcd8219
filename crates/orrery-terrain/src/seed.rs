//! Seed derivation for reproducible planet generation.
//!
//! One generation seed fans out into independent streams (noise permutation,
//! crater placement) so changing how many random numbers one stream consumes
//! never shifts another.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Stream name for the noise permutation table.
pub const NOISE_STREAM: &str = "noise";
/// Stream name for crater placement.
pub const CRATER_STREAM: &str = "craters";

/// Derive a u64 sub-seed for a named stream.
///
/// Uses SipHash (via std's `DefaultHasher`) to combine the generation seed
/// with the stream name into a well-distributed u64.
pub fn derive_stream_seed(seed: u64, stream: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    stream.hash(&mut hasher);
    hasher.finish()
}

/// Seed for [`crate::NoiseField::new`].
pub fn noise_seed(seed: u64) -> u32 {
    let derived = derive_stream_seed(seed, NOISE_STREAM);
    (derived ^ (derived >> 32)) as u32
}

/// Deterministic RNG for crater placement.
pub fn crater_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_stream_seed(seed, CRATER_STREAM))
}

/// A fresh seed from the thread-local OS-seeded generator.
pub fn random_seed() -> u64 {
    rand::random()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_derive_stream_seed_deterministic() {
        assert_eq!(
            derive_stream_seed(999, CRATER_STREAM),
            derive_stream_seed(999, CRATER_STREAM),
            "Same inputs must produce same derived seed"
        );
    }

    #[test]
    fn test_streams_are_independent() {
        assert_ne!(
            derive_stream_seed(42, NOISE_STREAM),
            derive_stream_seed(42, CRATER_STREAM),
            "Different streams should produce different seeds"
        );
    }

    #[test]
    fn test_different_generation_seeds() {
        assert_ne!(noise_seed(0), noise_seed(1));
    }

    #[test]
    fn test_crater_rng_deterministic() {
        let mut rng_a = crater_rng(42);
        let mut rng_b = crater_rng(42);
        for _ in 0..1000 {
            assert_eq!(
                rng_a.next_u64(),
                rng_b.next_u64(),
                "ChaCha8Rng sequences must match for same seed"
            );
        }
    }
}
