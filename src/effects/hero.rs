use super::ScrollProgress;

/// Linear map of `value` from `input` onto `output`, clamped to the ends of
/// `output`. A zero-width input range maps everything to `output[0]`.
pub fn interpolate(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let span = input[1] - input[0];
    if span == 0.0 || value.is_nan() {
        return output[0];
    }
    let t = ((value - input[0]) / span).clamp(0.0, 1.0);
    output[0] + (output[1] - output[0]) * t
}

/// Hero section that fades and shrinks away over the first part of the page.
///
/// Over scroll progress `0..=fade_end` opacity goes `1 -> 0` and scale goes
/// `1 -> end_scale`; past `fade_end` both hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    fade_end: f32,
    end_scale: f32,
    progress: f32,
}

impl HeroTransform {
    pub fn new(fade_end: f32, end_scale: f32) -> Self {
        Self {
            fade_end,
            end_scale,
            progress: 0.0,
        }
    }

    /// Update from a page scroll fraction in `[0, 1]`.
    pub fn update(&mut self, scroll_fraction: f32) {
        self.progress = scroll_fraction;
    }

    pub fn follow(&mut self, scroll: &ScrollProgress) {
        self.update(scroll.fraction());
    }

    pub fn opacity(&self) -> f32 {
        interpolate(self.progress, [0.0, self.fade_end], [1.0, 0.0])
    }

    pub fn scale(&self) -> f32 {
        interpolate(self.progress, [0.0, self.fade_end], [1.0, self.end_scale])
    }
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self::new(0.5, 0.8)
    }
}
