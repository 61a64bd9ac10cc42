use glam::Vec2;

/// Largest drift a [`LiquidCard`] allows on either axis, in pixels.
pub const MAX_DRIFT: f32 = 2.0;

/// Scale a drifting [`LiquidCard`] is drawn at.
pub const DRIFT_SCALE: f32 = 1.002;

/// Axis-aligned element bounds in window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.origin + self.size;
        p.x >= self.origin.x && p.y >= self.origin.y && p.x <= max.x && p.y <= max.y
    }
}

/// Element that leans toward the pointer while hovered.
#[derive(Clone, Debug, PartialEq)]
pub struct MagneticHover {
    strength: f32,
    hovered: bool,
    offset: Vec2,
}

impl MagneticHover {
    pub fn new(strength: f32) -> Self {
        Self {
            strength,
            hovered: false,
            offset: Vec2::ZERO,
        }
    }

    pub fn on_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer moved over the element. Ignored unless hovered.
    pub fn on_move(&mut self, pointer: Vec2, bounds: Rect) -> Vec2 {
        if self.hovered {
            self.offset = (pointer - bounds.center()) * self.strength;
        }
        self.offset
    }

    /// Pointer left: snap back to rest.
    pub fn on_leave(&mut self) {
        self.hovered = false;
        self.offset = Vec2::ZERO;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl Default for MagneticHover {
    fn default() -> Self {
        Self::new(0.2)
    }
}

/// Card that drifts very slightly with the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct LiquidCard {
    intensity: f32,
    offset: Vec2,
}

impl LiquidCard {
    pub fn new(intensity: f32) -> Self {
        Self {
            intensity,
            offset: Vec2::ZERO,
        }
    }

    pub fn on_move(&mut self, pointer: Vec2, bounds: Rect) -> Vec2 {
        let raw = (pointer - bounds.center()) * self.intensity;
        self.offset = raw.clamp(Vec2::splat(-MAX_DRIFT), Vec2::splat(MAX_DRIFT));
        self.offset
    }

    pub fn on_leave(&mut self) {
        self.offset = Vec2::ZERO;
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// `DRIFT_SCALE` while displaced, `1.0` at rest.
    pub fn scale(&self) -> f32 {
        if self.offset == Vec2::ZERO {
            1.0
        } else {
            DRIFT_SCALE
        }
    }
}

impl Default for LiquidCard {
    fn default() -> Self {
        Self::new(0.003)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnetic_requires_hover() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 50.0);
        let mut m = MagneticHover::default();
        assert_eq!(m.on_move(Vec2::new(100.0, 50.0), bounds), Vec2::ZERO);

        m.on_enter();
        let offset = m.on_move(Vec2::new(100.0, 50.0), bounds);
        assert!((offset - Vec2::new(10.0, 5.0)).length() < 1e-5);

        m.on_leave();
        assert_eq!(m.offset(), Vec2::ZERO);
        assert!(!m.is_hovered());
    }

    #[test]
    fn test_liquid_card_clamps() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 200.0);
        let mut card = LiquidCard::default();
        let far = card.on_move(Vec2::new(10_000.0, -10_000.0), bounds);
        assert_eq!(far, Vec2::new(MAX_DRIFT, -MAX_DRIFT));
        assert_eq!(card.scale(), DRIFT_SCALE);

        card.on_leave();
        assert_eq!(card.scale(), 1.0);
    }

    #[test]
    fn test_liquid_card_at_center_is_at_rest() {
        let bounds = Rect::new(10.0, 10.0, 20.0, 20.0);
        let mut card = LiquidCard::default();
        assert_eq!(card.on_move(bounds.center(), bounds), Vec2::ZERO);
        assert_eq!(card.scale(), 1.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(!r.contains(Vec2::new(11.0, 5.0)));
    }
}
