//! Trail particle and its render view.

use crate::lifecycle::opacity;
use glam::{Vec2, Vec3};
use std::fmt;

/// Opaque particle identifier, unique within one [`ParticleField`](crate::ParticleField).
///
/// Ids are handed out in spawn order and never reused, so they double as
/// stable keys for a renderer that animates per-particle state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single ephemeral trail particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    /// Screen-space position in pixels.
    pub position: Vec2,
    /// Pixels per tick.
    pub velocity: Vec2,
    /// Diameter in pixels.
    pub size: f32,
    /// sRGB colour, channels in `0.0..=1.0`.
    pub color: Vec3,
    /// Remaining life in `[0, 1]`.
    pub life: f32,
}

impl Particle {
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// What a renderer needs to draw this particle.
    pub fn view(&self) -> ParticleView {
        ParticleView {
            id: self.id,
            x: self.position.x,
            y: self.position.y,
            size: self.size,
            color: self.color,
            opacity: opacity(self.life),
        }
    }
}

/// Read-only render record for one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleView {
    pub id: ParticleId,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub color: Vec3,
    pub opacity: f32,
}
