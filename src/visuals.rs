//! Colour palette for trail particles.
//!
//! Particles pick their colour uniformly from a small fixed [`Palette`].
//! Colours are stored as sRGB in `0.0..=1.0`, which is what the hex strings
//! in a config file describe; [`srgb_to_linear`] converts them for the GPU.
//!
//! # Example
//!
//! ```
//! use glint::visuals::Palette;
//!
//! let palette = Palette::from_hex(&["#E4CFA4", "#DAD7F0"]).unwrap();
//! assert_eq!(palette.len(), 2);
//! ```

use crate::error::ConfigError;
use glam::Vec3;

/// Champagne gold.
pub const GOLD: &str = "#E4CFA4";
/// Soft lilac.
pub const LILAC: &str = "#DAD7F0";

/// A non-empty, fixed set of particle colours.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Vec3>,
}

impl Palette {
    /// The two-colour gold and lilac palette of the landing page.
    pub fn brand() -> Self {
        Self {
            colors: vec![hex_to_rgb(GOLD).unwrap_or(Vec3::ONE), hex_to_rgb(LILAC).unwrap_or(Vec3::ONE)],
        }
    }

    /// Build a palette from `#RRGGBB` strings.
    pub fn from_hex<S: AsRef<str>>(entries: &[S]) -> Result<Self, ConfigError> {
        let colors = entries
            .iter()
            .map(|s| hex_to_rgb(s.as_ref()).ok_or_else(|| ConfigError::Color(s.as_ref().to_string())))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_colors(colors)
    }

    /// Build a palette from sRGB colours.
    pub fn from_colors(colors: Vec<Vec3>) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Number of colours. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Colour at `index`, wrapping around.
    #[inline]
    pub fn color(&self, index: usize) -> Vec3 {
        self.colors[index % self.colors.len()]
    }

    /// All colours in order.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::brand()
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into sRGB channels in `0.0..=1.0`.
pub fn hex_to_rgb(hex: &str) -> Option<Vec3> {
    let digits = hex.trim().strip_prefix('#').unwrap_or(hex.trim());
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Vec3::new(
        channel(0)? as f32 / 255.0,
        channel(2)? as f32 / 255.0,
        channel(4)? as f32 / 255.0,
    ))
}

/// Convert an sRGB colour to linear light.
pub fn srgb_to_linear(c: Vec3) -> Vec3 {
    let f = |v: f32| {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(f(c.x), f(c.y), f(c.z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_rgb() {
        let gold = hex_to_rgb(GOLD).unwrap();
        assert!((gold.x - 228.0 / 255.0).abs() < 1e-6);
        assert!((gold.y - 207.0 / 255.0).abs() < 1e-6);
        assert!((gold.z - 164.0 / 255.0).abs() < 1e-6);

        assert_eq!(hex_to_rgb("ffffff"), Some(Vec3::ONE));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#gg0000"), None);
        assert_eq!(hex_to_rgb("#+1+2+3"), None);
        assert_eq!(hex_to_rgb("-1-2-3"), None);
    }

    #[test]
    fn test_palette_rejects_bad_entries() {
        assert!(matches!(Palette::from_hex::<&str>(&[]), Err(ConfigError::EmptyPalette)));
        assert!(matches!(
            Palette::from_hex(&["#E4CFA4", "teal"]),
            Err(ConfigError::Color(ref s)) if s == "teal"
        ));
    }

    #[test]
    fn test_palette_wraps_index() {
        let palette = Palette::brand();
        assert_eq!(palette.color(0), palette.color(2));
        assert_ne!(palette.color(0), palette.color(1));
    }

    #[test]
    fn test_srgb_to_linear_endpoints() {
        assert_eq!(srgb_to_linear(Vec3::ZERO), Vec3::ZERO);
        let white = srgb_to_linear(Vec3::ONE);
        assert!((white - Vec3::ONE).abs().max_element() < 1e-5);
    }
}
