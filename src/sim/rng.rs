//! Seeded RNG for simulated bowlers.
//!
//! The same seed always produces the same roll sequence.
//!
//! ```
//! use bowling_score::sim::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_pins(10), b.gen_pins(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for pin counts.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Derive an independent RNG, e.g. one per bowler in a session.
    ///
    /// Forks from equal states are equal.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Uniform pin count in `0..=max`.
    pub fn gen_pins(&mut self, max: u8) -> u8 {
        self.inner.gen_range(0..=max)
    }

    /// `true` with the given probability. NaN counts as zero.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self.inner.gen_bool(probability)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_pins(10), rng2.gen_pins(10));
        }
    }

    #[test]
    fn test_gen_pins_bounds() {
        let mut rng = GameRng::new(3);
        for max in 0..=10 {
            for _ in 0..50 {
                assert!(rng.gen_pins(max) <= max);
            }
        }
        assert_eq!(rng.gen_pins(0), 0);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();
        assert_eq!(forked1.seed(), forked2.seed());
        assert_ne!(forked1.seed(), rng1.seed());
    }

    #[test]
    fn test_gen_bool_out_of_range_probability() {
        let mut rng = GameRng::new(5);
        for _ in 0..20 {
            assert!(!rng.gen_bool(f64::NAN));
            assert!(!rng.gen_bool(-0.5));
            assert!(rng.gen_bool(1.5));
        }
    }
}
