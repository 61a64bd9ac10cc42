/// Page scroll progress and the section currently in view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    fraction: f32,
    section: usize,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from the document's scroll metrics and return the fraction.
    ///
    /// `fraction = scroll_top / (scroll_height - client_height)`, clamped to
    /// `[0, 1]`. A page that cannot scroll reports `0`.
    pub fn update(&mut self, scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
        let range = scroll_height - client_height;
        self.fraction = if range > 0.0 {
            (scroll_top / range).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.section = Self::section_at(scroll_top, client_height);
        self.fraction
    }

    /// Index of the full-viewport section containing `scroll_y`.
    pub fn section_at(scroll_y: f32, viewport_height: f32) -> usize {
        if viewport_height <= 0.0 || scroll_y <= 0.0 {
            0
        } else {
            (scroll_y / viewport_height).floor() as usize
        }
    }

    /// Progress through the page in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Width of a progress bar spanning `total_width` at this progress.
    pub fn bar_width(&self, total_width: f32) -> f32 {
        self.fraction * total_width
    }

    pub fn current_section(&self) -> usize {
        self.section
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction() {
        let mut s = ScrollProgress::new();
        assert_eq!(s.update(500.0, 3000.0, 1000.0), 0.25);
        assert_eq!(s.update(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(s.bar_width(800.0), 800.0);
    }

    #[test]
    fn test_unscrollable_page() {
        let mut s = ScrollProgress::new();
        assert_eq!(s.update(0.0, 800.0, 800.0), 0.0);
        assert_eq!(s.update(10.0, 600.0, 800.0), 0.0);
    }

    #[test]
    fn test_section_index() {
        assert_eq!(ScrollProgress::section_at(0.0, 900.0), 0);
        assert_eq!(ScrollProgress::section_at(899.0, 900.0), 0);
        assert_eq!(ScrollProgress::section_at(1800.0, 900.0), 2);
        assert_eq!(ScrollProgress::section_at(500.0, 0.0), 0);

        let mut s = ScrollProgress::new();
        s.update(1000.0, 5000.0, 900.0);
        assert_eq!(s.current_section(), 1);
    }
}
