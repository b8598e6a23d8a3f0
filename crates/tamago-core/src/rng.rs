//! RNG trait abstraction for creature behavior
//!
//! Lets the model run on `thread_rng()` in play and on a seeded
//! `Xoshiro256StarStar` in tests and headless runs.

/// Random number generator used for autonomous creature actions
pub trait CreatureRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Pick a uniform index in `0..len` (`len` must be non-zero)
    fn gen_index(&mut self, len: usize) -> usize;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }
}

impl<T: ?Sized + rand::Rng> CreatureRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        rand::Rng::gen_range(self, 0..len)
    }
}
