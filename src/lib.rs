//! # Glint - pointer trail particles
//!
//! A small, bounded particle field that trails the pointer, plus the state
//! models behind a landing page's other pointer and scroll effects.
//!
//! ## Quick Start
//!
//! ```ignore
//! use glint::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::new()
//!         .with_config(TrailConfig::default().with_max_particles(30))
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### The particle field
//!
//! [`ParticleField`] owns the live set. Each raw pointer move passes a spawn
//! gate (5% by default); a pass spawns one particle at the pointer with a
//! random velocity, size and palette colour. Every tick moves each particle by
//! its velocity, takes a fixed amount off its life, shrinks it by a fixed
//! factor, and drops it once its life reaches zero. The set never holds more
//! than [`TrailConfig::max_particles`]; the oldest particle goes first.
//!
//! ```
//! use glint::{ParticleField, TrailConfig};
//!
//! let config = TrailConfig::default()
//!     .with_max_particles(3)
//!     .with_life_decrement(0.5)
//!     .with_size_decay(1.0);
//! let mut field = ParticleField::seeded(config, 0).unwrap();
//!
//! for x in 0..4 {
//!     field.spawn_at(x as f32, 0.0);
//! }
//! assert_eq!(field.len(), 3);
//!
//! field.tick();
//! field.tick();
//! assert!(field.is_empty());
//! ```
//!
//! ### Activation
//!
//! [`TrailEffect`] wraps a field with the two resources that drive it, a
//! pointer listener and a tick timer, both obtained from a [`Host`]. They are
//! acquired together on activation and released together on deactivation.
//!
//! ### Configuration
//!
//! [`TrailConfig`] is plain serde data; see [`config`] for the JSON shape.

pub mod config;
pub mod effect;
pub mod effects;
mod error;
pub mod field;
pub mod gpu;
pub mod input;
pub mod lifecycle;
mod particle;
mod simulation;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use config::TrailConfig;
pub use effect::{Host, ListenerHandle, TimerHandle, TrailEffect};
pub use error::{ConfigError, GpuError, HostError, SimulationError};
pub use field::ParticleField;
pub use glam::{Vec2, Vec3};
pub use lifecycle::Decay;
pub use particle::{Particle, ParticleId, ParticleView};
pub use simulation::{Simulation, WindowHost};
pub use spawn::SpawnContext;
pub use visuals::Palette;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use glint::prelude::*;
/// ```
pub mod prelude {
    pub use crate::effect::{Host, ListenerHandle, TimerHandle, TrailEffect};
    pub use crate::effects::{
        AnimatedCounter, CursorFollower, HeroTransform, InteractiveButton, LiquidCard, MagneticHover, Rect,
        ScrollProgress, TextReveal,
    };
    pub use crate::error::{ConfigError, HostError, SimulationError};
    pub use crate::field::ParticleField;
    pub use crate::input::{Input, PointerEvent};
    pub use crate::particle::{Particle, ParticleId, ParticleView};
    pub use crate::simulation::{Simulation, WindowHost};
    pub use crate::time::TickClock;
    pub use crate::visuals::Palette;
    pub use crate::TrailConfig;
    pub use crate::{Vec2, Vec3};
}
