//! Injectable, seedable RNG for scenario synthesis.
//!
//! Fleet shuffling is the only randomized step in scenario generation.  It
//! always draws from a `ScenarioRng` handed in by the caller so that the same
//! seed produces the same fleet order.  There is no ambient global generator.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Scenario-level deterministic RNG.
///
/// Used only in single-threaded contexts; nothing in scenario synthesis runs
/// in parallel.
pub struct ScenarioRng(SmallRng);

impl ScenarioRng {
    pub fn new(seed: u64) -> Self {
        ScenarioRng(SmallRng::seed_from_u64(seed))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}

impl std::fmt::Debug for ScenarioRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ScenarioRng")
    }
}
