use crate::cipher::key::CipherKey;
use fastrand::Rng;

/// Seeded pseudo-random source shared by every randomized operation.
///
/// Each component that needs randomness takes `&mut RandomSource`, so the
/// sequence of draws is strictly ordered and two sources built from the same
/// seed replay identical results.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Rng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng::with_seed(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self { rng: Rng::new() }
    }

    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::new(s),
            None => Self::from_entropy(),
        }
    }

    /// Resets the generator state deterministically.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Uniform integer in `[0, max]`, inclusive.
    #[inline(always)]
    pub fn rand_int(&mut self, max: usize) -> usize {
        self.rng.usize(0..=max)
    }

    /// Two distinct indices in `0..n`. The second index is redrawn until it
    /// differs from the first.
    #[inline(always)]
    pub fn distinct_pair(&mut self, n: usize) -> (usize, usize) {
        debug_assert!(n >= 2);
        let a = self.rand_int(n - 1);
        let mut b = self.rand_int(n - 1);
        while a == b {
            b = self.rand_int(n - 1);
        }
        (a, b)
    }

    /// Uniformly distributed permutation of the alphabet.
    pub fn random_permutation(&mut self) -> CipherKey {
        let mut map = CipherKey::identity().into_indices();
        self.rng.shuffle(&mut map);
        CipherKey::from_indices_unchecked(map)
    }

    /// Raw draw used to seed independent child sources.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.u64(..)
    }
}
