use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Same colour with its alpha scaled by `opacity` (0.0..=1.0).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let alpha = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a: alpha, ..self }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

pub const FESTIVAL_GOLD: RgbaColor = RgbaColor::rgb(255, 215, 0);
pub const FESTIVAL_VIOLET: RgbaColor = RgbaColor::rgb(196, 113, 237);
pub const FESTIVAL_PINK: RgbaColor = RgbaColor::rgb(255, 107, 157);
pub const FESTIVAL_CYAN: RgbaColor = RgbaColor::rgb(18, 205, 234);
pub const FESTIVAL_GREEN: RgbaColor = RgbaColor::rgb(88, 232, 169);

/// Palette cycled through by orbs and particles.
pub const FESTIVAL_PALETTE: [RgbaColor; 5] = [
    FESTIVAL_GOLD,
    FESTIVAL_VIOLET,
    FESTIVAL_PINK,
    FESTIVAL_CYAN,
    FESTIVAL_GREEN,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_opaque_and_distinct() {
        for (i, color) in FESTIVAL_PALETTE.iter().enumerate() {
            assert_eq!(color.a, 255);
            assert!(!FESTIVAL_PALETTE[i + 1..].contains(color));
        }
    }

    #[test]
    fn test_with_opacity_scales_alpha() {
        assert_eq!(FESTIVAL_GOLD.with_opacity(0.5).a, 128);
        assert_eq!(FESTIVAL_GOLD.with_opacity(2.0).a, 255);
        assert_eq!(FESTIVAL_GOLD.with_opacity(-1.0).a, 0);
    }
}
