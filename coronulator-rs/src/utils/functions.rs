use rand::{rngs::SmallRng, SeedableRng};

/// A fast random number generator seeded from the operating system.
pub fn default_rng() -> SmallRng {
    SmallRng::from_entropy()
}

/// A reproducible random number generator.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
