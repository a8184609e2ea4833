//! RGBA color value type.
//!
//! The stage API talks in plain 0-255 channel tuples; conversion into
//! raylib's color type happens at the draw seam.

/// Immutable RGBA color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 255, 255);
    pub const GRAY: Color = Color::new(128, 128, 128, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Ordered channel tuple, (r, g, b, a).
    pub const fn components(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    /// Replace the alpha channel, keeping the other components.
    pub const fn with_alpha(&self, a: u8) -> Self {
        Self { a, ..*self }
    }

    /// Component-wise multiply with another color.
    ///
    /// Used at the draw seam where a tint modulates an entity's base color.
    pub fn modulate(&self, other: Color) -> Color {
        Color::new(
            ((self.r as u16 * other.r as u16) / 255) as u8,
            ((self.g as u16 * other.g as u16) / 255) as u8,
            ((self.b as u16 * other.b as u16) / 255) as u8,
            ((self.a as u16 * other.a as u16) / 255) as u8,
        )
    }
}

impl From<Color> for raylib::prelude::Color {
    fn from(c: Color) -> Self {
        raylib::prelude::Color::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_components_order() {
        let c = Color::new(1, 2, 3, 4);
        assert_eq!(c.components(), (1, 2, 3, 4));
    }

    #[test]
    fn test_with_alpha_keeps_rgb() {
        let c = Color::RED.with_alpha(9);
        assert_eq!(c, Color::new(255, 0, 0, 9));
    }

    #[test]
    fn test_modulate_with_white_is_identity() {
        let c = Color::new(100, 150, 200, 255);
        assert_eq!(c.modulate(Color::WHITE), c);
    }

    #[test]
    fn test_modulate_with_transparent_zeroes_out() {
        let c = Color::new(100, 150, 200, 255);
        assert_eq!(c.modulate(Color::TRANSPARENT), Color::new(0, 0, 0, 0));
    }

    #[test]
    fn test_into_raylib() {
        let rc: raylib::prelude::Color = Color::new(10, 20, 30, 40).into();
        assert_eq!((rc.r, rc.g, rc.b, rc.a), (10, 20, 30, 40));
    }
}
