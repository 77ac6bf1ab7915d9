use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform floats in `[0, 1)`.
///
/// Every stochastic step of a run draws through this trait, so a seeded
/// source makes the whole result tree reproducible.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_unit() * len as f64) as usize;
        idx.min(len - 1)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Fresh deterministic stream for one run
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fisher-Yates shuffle driven by a `RandomSource`
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.pick_index(i + 1);
        items.swap(i, j);
    }
}
