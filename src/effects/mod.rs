//! State models for the page's pointer and scroll effects.
//!
//! Each effect owns its state and is driven explicitly by its host: create
//! it when the element mounts, feed it events, drop or reset it when the
//! element goes away. Nothing here is shared between effects.
//!
//! | Effect | Input | Output |
//! |--------|-------|--------|
//! | [`MagneticHover`] | pointer over an element | translation toward the pointer |
//! | [`LiquidCard`] | pointer over a card | small clamped drift and scale |
//! | [`AnimatedCounter`] | elapsed time | counted-up number text |
//! | [`ScrollProgress`] | scroll metrics | progress fraction, section index |
//! | [`TextReveal`] | elapsed time | per-word opacity and rise |
//! | [`CursorFollower`] | pointer position, frame time | spring-smoothed ring position |
//! | [`HeroTransform`] | scroll fraction | hero opacity and scale |
//! | [`InteractiveButton`] | pointer over a button | glow centre, press/hover scale |

mod button;
mod counter;
mod cursor;
mod hero;
mod magnetic;
mod reveal;
mod scroll;

pub use button::{InteractiveButton, GLOW_ALPHA, GLOW_RADIUS};
pub use counter::{group_thousands, AnimatedCounter};
pub use cursor::{CursorFollower, CURSOR_DAMPING, CURSOR_STIFFNESS};
pub use hero::{interpolate, HeroTransform};
pub use magnetic::{LiquidCard, MagneticHover, Rect, DRIFT_SCALE, MAX_DRIFT};
pub use reveal::{RevealWord, TextReveal};
pub use scroll::ScrollProgress;
