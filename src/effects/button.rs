use super::Rect;
use glam::Vec2;

/// Radius of the hover glow in pixels.
pub const GLOW_RADIUS: f32 = 100.0;
/// Glow alpha at its centre.
pub const GLOW_ALPHA: f32 = 0.3;

/// Button with a radial glow that follows the pointer while hovered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractiveButton {
    hovered: bool,
    pressed: bool,
    local_pointer: Vec2,
}

impl InteractiveButton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_enter(&mut self) {
        self.hovered = true;
    }

    /// Track the pointer relative to the button's top-left corner.
    pub fn on_move(&mut self, pointer: Vec2, bounds: Rect) {
        self.local_pointer = pointer - bounds.origin;
    }

    pub fn on_leave(&mut self) {
        self.hovered = false;
        self.pressed = false;
    }

    pub fn on_press(&mut self) {
        self.pressed = true;
    }

    pub fn on_release(&mut self) {
        self.pressed = false;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Glow centre in button-local pixels, only while hovered.
    pub fn glow_center(&self) -> Option<Vec2> {
        self.hovered.then_some(self.local_pointer)
    }

    /// Glow alpha at a button-local point: fades linearly to zero at
    /// [`GLOW_RADIUS`], and is zero everywhere when not hovered.
    pub fn glow_alpha(&self, local: Vec2) -> f32 {
        match self.glow_center() {
            Some(center) => GLOW_ALPHA * (1.0 - center.distance(local) / GLOW_RADIUS).max(0.0),
            None => 0.0,
        }
    }

    /// Pressed shrinks, hovered grows.
    pub fn scale(&self) -> f32 {
        if self.pressed {
            0.95
        } else if self.hovered {
            1.05
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glow_follows_local_pointer() {
        let bounds = Rect::new(100.0, 50.0, 200.0, 40.0);
        let mut button = InteractiveButton::new();
        button.on_move(Vec2::new(130.0, 60.0), bounds);
        assert_eq!(button.glow_center(), None);

        button.on_enter();
        button.on_move(Vec2::new(150.0, 70.0), bounds);
        assert_eq!(button.glow_center(), Some(Vec2::new(50.0, 20.0)));
        assert_eq!(button.glow_alpha(Vec2::new(50.0, 20.0)), GLOW_ALPHA);
        assert!((button.glow_alpha(Vec2::new(100.0, 20.0)) - GLOW_ALPHA * 0.5).abs() < 1e-6);
        assert_eq!(button.glow_alpha(Vec2::new(200.0, 20.0)), 0.0);

        button.on_leave();
        assert_eq!(button.glow_alpha(Vec2::new(50.0, 20.0)), 0.0);
    }

    #[test]
    fn test_scale_states() {
        let mut button = InteractiveButton::new();
        assert_eq!(button.scale(), 1.0);
        button.on_enter();
        assert_eq!(button.scale(), 1.05);
        button.on_press();
        assert_eq!(button.scale(), 0.95);
        button.on_release();
        assert_eq!(button.scale(), 1.05);
        button.on_press();
        button.on_leave();
        assert_eq!(button.scale(), 1.0);
    }
}
