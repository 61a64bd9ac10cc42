//! Particle aging.
//!
//! Every tick a live particle loses a fixed amount of life and its size is
//! scaled by a fixed factor. Life starts at `1.0`; the tick that takes it to
//! or below zero is the tick the particle is removed.
//!
//! | Field | Per tick | Meaning |
//! |-------|----------|---------|
//! | `life` | `life -= life_decrement` | Remaining life, drives opacity |
//! | `size` | `size *= size_decay` | Radius in pixels, never grows |

use crate::particle::Particle;

/// Life a particle is born with.
pub const INITIAL_LIFE: f32 = 1.0;

/// Per-tick decay rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decay {
    /// Subtracted from `life` every tick.
    pub life_decrement: f32,
    /// Multiplies `size` every tick. Must be in `[0, 1]`.
    pub size_decay: f32,
}

impl Decay {
    /// Create decay rules from a life decrement and a size factor.
    pub fn new(life_decrement: f32, size_decay: f32) -> Self {
        Self {
            life_decrement,
            size_decay,
        }
    }

    /// Age a particle by one tick: integrate position, decay life and size.
    ///
    /// Returns `true` while the particle is still alive.
    #[inline]
    pub fn step(&self, p: &mut Particle) -> bool {
        p.position += p.velocity;
        p.life -= self.life_decrement;
        p.size *= self.size_decay;
        p.is_alive()
    }

    /// Number of ticks until a fresh particle is removed, counting the
    /// removing tick.
    ///
    /// Replays the same f32 subtractions as [`Decay::step`], so rounding is
    /// accounted for: the default `0.02` decrement takes 51 ticks, not 50.
    /// Returns `None` when life would never reach zero, either because the
    /// decrement is not a positive finite number or because it is too small
    /// to change `1.0`.
    pub fn ticks_to_live(&self) -> Option<u32> {
        let d = self.life_decrement;
        if !(d > 0.0 && d.is_finite()) {
            return None;
        }
        let mut life = INITIAL_LIFE;
        let mut ticks = 0u32;
        while life > 0.0 {
            let next = life - d;
            if next == life {
                return None;
            }
            life = next;
            ticks = ticks.checked_add(1)?;
        }
        Some(ticks)
    }
}

impl Default for Decay {
    fn default() -> Self {
        Self::new(0.02, 0.99)
    }
}

/// Render opacity for a given life value.
#[inline]
pub fn opacity(life: f32) -> f32 {
    life.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleId;
    use glam::{Vec2, Vec3};

    fn particle() -> Particle {
        Particle {
            id: ParticleId(0),
            position: Vec2::new(10.0, 20.0),
            velocity: Vec2::new(1.0, -0.5),
            size: 4.0,
            color: Vec3::ONE,
            life: INITIAL_LIFE,
        }
    }

    #[test]
    fn test_step_integrates_and_decays() {
        let decay = Decay::default();
        let mut p = particle();
        assert!(decay.step(&mut p));
        assert_eq!(p.position, Vec2::new(11.0, 19.5));
        assert_eq!(p.life, 1.0 - 0.02);
        assert_eq!(p.size, 4.0 * 0.99);
    }

    #[test]
    fn test_step_reports_death_at_zero() {
        let decay = Decay::new(0.5, 1.0);
        let mut p = particle();
        assert!(decay.step(&mut p));
        assert!(!decay.step(&mut p));
        assert_eq!(p.life, 0.0);
    }

    #[test]
    fn test_ticks_to_live() {
        assert_eq!(Decay::new(0.5, 1.0).ticks_to_live(), Some(2));
        assert_eq!(Decay::new(0.25, 1.0).ticks_to_live(), Some(4));
        assert_eq!(Decay::new(0.0, 1.0).ticks_to_live(), None);
        assert_eq!(Decay::new(-0.1, 1.0).ticks_to_live(), None);
        assert_eq!(Decay::new(1e-9, 1.0).ticks_to_live(), None);
    }

    #[test]
    fn test_ticks_to_live_matches_step() {
        for d in [0.02, 0.3, 0.1, 0.07, 1.0] {
            let decay = Decay::new(d, 0.99);
            let mut p = particle();
            let mut ticks = 1;
            while decay.step(&mut p) {
                ticks += 1;
            }
            assert_eq!(decay.ticks_to_live(), Some(ticks), "decrement {}", d);
        }
    }

    #[test]
    fn test_opacity_clamps() {
        assert_eq!(opacity(1.5), 1.0);
        assert_eq!(opacity(0.25), 0.25);
        assert_eq!(opacity(-0.1), 0.0);
    }
}
