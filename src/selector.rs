use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

/// Source of comic ids, one call per iteration of a run.
pub trait IdSource {
    fn next_id(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Uniform, independent draws. The same id can come up twice.
#[derive(Debug)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.random_range(range)
    }
}
