//! Bounded particle field driven by pointer movement.
//!
//! The field owns the live set of trail particles. Pointer moves pass a
//! stochastic gate and occasionally spawn a particle at the pointer; every
//! tick integrates, ages and prunes the set.
//!
//! # Example
//!
//! ```
//! use glint::{ParticleField, TrailConfig};
//!
//! let config = TrailConfig::default().with_spawn_probability(1.0);
//! let mut field = ParticleField::seeded(config, 42).unwrap();
//!
//! field.on_pointer_move(120.0, 80.0);
//! assert_eq!(field.len(), 1);
//!
//! field.tick();
//! let p = &field.snapshot()[0];
//! assert_eq!(p.life, 1.0 - 0.02);
//! ```
//!
//! # Invariants
//!
//! - `len() <= max_particles()` after every operation.
//! - Particles are ordered oldest first; eviction removes from the front.
//! - A particle whose life reaches zero is gone when `tick()` returns.

use crate::config::TrailConfig;
use crate::error::ConfigError;
use crate::lifecycle::{Decay, INITIAL_LIFE};
use crate::particle::{Particle, ParticleId, ParticleView};
use crate::spawn::SpawnContext;
use crate::visuals::Palette;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

/// The live set of trail particles.
#[derive(Clone, Debug)]
pub struct ParticleField<R = SmallRng> {
    particles: Vec<Particle>,
    max_particles: usize,
    spawn_probability: f32,
    velocity_range: [f32; 2],
    size_range: [f32; 2],
    decay: Decay,
    palette: Palette,
    spawn: SpawnContext<R>,
    next_id: u64,
}

impl ParticleField<SmallRng> {
    /// Field seeded from the wall clock.
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        Self::with_spawn_context(config, SpawnContext::from_time())
    }

    /// Field with a deterministic generator.
    pub fn seeded(config: TrailConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_spawn_context(config, SpawnContext::seeded(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    /// Field drawing all randomness from `rng`.
    pub fn with_rng(config: TrailConfig, rng: R) -> Result<Self, ConfigError> {
        Self::with_spawn_context(config, SpawnContext::new(rng))
    }

    fn with_spawn_context(config: TrailConfig, spawn: SpawnContext<R>) -> Result<Self, ConfigError> {
        config.validate()?;
        let palette = config.parsed_palette()?;
        Ok(Self {
            particles: Vec::with_capacity(config.max_particles),
            max_particles: config.max_particles,
            spawn_probability: config.spawn_probability,
            velocity_range: config.velocity_range,
            size_range: config.size_range,
            decay: config.decay(),
            palette,
            spawn,
            next_id: 0,
        })
    }

    /// Handle one raw pointer-move event.
    ///
    /// Spawns a particle at `(x, y)` only if the spawn gate passes. Returns the
    /// new particle's id when one was spawned.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> Option<ParticleId> {
        if self.spawn.gate(self.spawn_probability) {
            Some(self.spawn_at(x, y))
        } else {
            None
        }
    }

    /// Spawn a particle at `(x, y)` unconditionally.
    pub fn spawn_at(&mut self, x: f32, y: f32) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;

        let particle = Particle {
            id,
            position: Vec2::new(x, y),
            velocity: self.spawn.velocity(self.velocity_range),
            size: self.spawn.size(self.size_range),
            color: self.spawn.color(&self.palette),
            life: INITIAL_LIFE,
        };

        // Make room first so the set never exceeds the bound.
        if self.particles.len() >= self.max_particles {
            let excess = self.particles.len() + 1 - self.max_particles;
            self.particles.drain(..excess);
            log::debug!("Evicted {} oldest trail particle(s)", excess);
        }
        self.particles.push(particle);
        log::trace!("Spawned particle {} at ({}, {})", id, x, y);
        id
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) {
        let decay = self.decay;
        self.particles.retain_mut(|p| decay.step(p));
    }

    /// Current live set, oldest first.
    #[inline]
    pub fn snapshot(&self) -> &[Particle] {
        &self.particles
    }

    /// Render records for the current live set, oldest first.
    pub fn views(&self) -> impl ExactSizeIterator<Item = ParticleView> + '_ {
        self.particles.iter().map(Particle::view)
    }

    /// Drop every live particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Live set bound.
    #[inline]
    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    #[inline]
    pub fn decay(&self) -> Decay {
        self.decay
    }

    /// Change the spawn gate probability, clamped to `[0, 1]`.
    pub fn set_spawn_probability(&mut self, probability: f32) {
        self.spawn_probability = probability.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn spawn_probability(&self) -> f32 {
        self.spawn_probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(config: TrailConfig) -> ParticleField {
        ParticleField::seeded(config, 17).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = TrailConfig::default().with_max_particles(0);
        assert!(matches!(ParticleField::seeded(config, 0), Err(ConfigError::ZeroBound)));
    }

    #[test]
    fn test_spawn_initial_state() {
        let mut f = field(TrailConfig::default());
        let id = f.spawn_at(-5.0, 3000.0);
        let p = &f.snapshot()[0];
        assert_eq!(p.id, id);
        assert_eq!(p.position, Vec2::new(-5.0, 3000.0));
        assert_eq!(p.life, 1.0);
        assert!((2.0..=8.0).contains(&p.size));
        assert!((-1.0..=1.0).contains(&p.velocity.x));
        assert!((-1.0..=1.0).contains(&p.velocity.y));
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut f = field(TrailConfig::default().with_max_particles(2));
        let ids: Vec<ParticleId> = (0..5).map(|i| f.spawn_at(i as f32, 0.0)).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut f = field(TrailConfig::default().with_max_particles(3));
        let a = f.spawn_at(0.0, 0.0);
        let b = f.spawn_at(1.0, 0.0);
        let c = f.spawn_at(2.0, 0.0);
        let d = f.spawn_at(3.0, 0.0);
        let ids: Vec<ParticleId> = f.snapshot().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![b, c, d]);
        assert!(!ids.contains(&a));
    }

    #[test]
    fn test_tick_removes_dead_particles() {
        let config = TrailConfig::default().with_life_decrement(0.4);
        let mut f = field(config);
        f.spawn_at(0.0, 0.0);
        f.tick();
        f.tick();
        assert_eq!(f.len(), 1);
        f.tick();
        assert!(f.is_empty());
    }

    #[test]
    fn test_tick_on_empty_field() {
        let mut f = field(TrailConfig::default());
        f.tick();
        assert!(f.is_empty());
    }

    #[test]
    fn test_views_report_opacity() {
        let mut f = field(TrailConfig::default().with_life_decrement(0.25));
        f.spawn_at(10.0, 10.0);
        f.tick();
        let view = f.views().next().unwrap();
        assert_eq!(view.opacity, 0.75);
        assert_eq!(view.size, f.snapshot()[0].size);
    }

    #[test]
    fn test_set_spawn_probability_clamps() {
        let mut f = field(TrailConfig::default());
        f.set_spawn_probability(3.0);
        assert_eq!(f.spawn_probability(), 1.0);
        f.set_spawn_probability(-1.0);
        assert_eq!(f.spawn_probability(), 0.0);
    }

    #[test]
    fn test_clear() {
        let mut f = field(TrailConfig::default());
        f.spawn_at(0.0, 0.0);
        f.clear();
        assert!(f.is_empty());
    }
}
