use glam::Vec2;
use std::time::Duration;

/// Spring stiffness of the cursor follower.
pub const CURSOR_STIFFNESS: f32 = 700.0;
/// Spring damping of the cursor follower.
pub const CURSOR_DAMPING: f32 = 25.0;

// Integration substep and the longest step simulated in one call.
const SUBSTEP: f32 = 0.001;
const MAX_STEP: f32 = 0.1;
const REST_DELTA: f32 = 0.01;
const REST_SPEED: f32 = 0.01;

/// Ring that chases the pointer on a damped spring.
///
/// The spring has unit mass. With the default constants it is underdamped,
/// so the ring overshoots a little before settling on the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorFollower {
    stiffness: f32,
    damping: f32,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    hovering: bool,
}

impl CursorFollower {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness,
            damping,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            hovering: false,
        }
    }

    /// New pointer position to chase.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Place the ring on `position` at rest.
    pub fn jump_to(&mut self, position: Vec2) {
        self.position = position;
        self.target = position;
        self.velocity = Vec2::ZERO;
    }

    /// Advance the spring by `dt` and return the new position.
    ///
    /// Steps longer than 100 ms are shortened, so a stalled host does not
    /// replay a long backlog.
    pub fn step(&mut self, dt: Duration) -> Vec2 {
        let mut remaining = dt.as_secs_f32().min(MAX_STEP);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let accel = (self.target - self.position) * self.stiffness - self.velocity * self.damping;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if self.is_at_rest() {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
        }
        self.position
    }

    pub fn is_at_rest(&self) -> bool {
        self.position.distance(self.target) < REST_DELTA && self.velocity.length() < REST_SPEED
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Whether the pointer is over something interactive.
    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Ring scale: enlarged while hovering.
    pub fn scale(&self) -> f32 {
        if self.hovering {
            1.5
        } else {
            1.0
        }
    }

    pub fn opacity(&self) -> f32 {
        if self.hovering {
            0.8
        } else {
            0.4
        }
    }
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new(CURSOR_STIFFNESS, CURSOR_DAMPING)
    }
}
