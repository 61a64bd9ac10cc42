//! Random source for particle spawning.
//!
//! All randomness in a trail goes through [`SpawnContext`]: the spawn gate
//! sample, initial velocity, size, and palette pick. The generator is a type
//! parameter, so tests can pin it to a seed or swap in a mock.

use crate::visuals::Palette;
use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Helpers for drawing spawn parameters from an injectable generator.
#[derive(Clone, Debug)]
pub struct SpawnContext<R = SmallRng> {
    rng: R,
}

impl SpawnContext<SmallRng> {
    /// Deterministic context for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Context seeded from the wall clock, different on every run.
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::seeded(seed)
    }
}

impl<R: Rng> SpawnContext<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Spawn gate: `true` with the given probability.
    ///
    /// A probability of `0.0` never passes and `1.0` always passes, since the
    /// sample is drawn from `[0, 1)`.
    #[inline]
    pub fn gate(&mut self, probability: f32) -> bool {
        self.rng.gen::<f32>() < probability
    }

    /// Uniform sample from `[min, max]`. Requires `min <= max`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..=max)
    }

    /// Velocity with each axis drawn independently from `[min, max]`.
    pub fn velocity(&mut self, [min, max]: [f32; 2]) -> Vec2 {
        Vec2::new(self.random_range(min, max), self.random_range(min, max))
    }

    /// Size drawn from `[min, max]`.
    pub fn size(&mut self, [min, max]: [f32; 2]) -> f32 {
        self.random_range(min, max)
    }

    /// Uniformly chosen palette colour.
    pub fn color(&mut self, palette: &Palette) -> Vec3 {
        palette.color(self.rng.gen_range(0..palette.len()))
    }
}
