//! Theme module for the festival countdown
//!
//! Defines the FestivalTheme colours and conversion between the
//! model-level `RgbaColor` and egui::Color32.

use egui::Color32;

use crate::models::color::{RgbaColor, FESTIVAL_GOLD, FESTIVAL_VIOLET};

pub fn to_color32(color: RgbaColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// Same colour with alpha scaled by `opacity`, unmultiplied semantics.
pub fn with_alpha(color: RgbaColor, opacity: f32) -> Color32 {
    to_color32(color.with_opacity(opacity))
}

#[derive(Debug, Clone)]
pub struct FestivalTheme {
    /// Gold used for the number, ornaments and emblem
    pub accent: RgbaColor,
    /// Secondary violet used by the emblem's middle ring
    pub accent_secondary: RgbaColor,
    /// Backdrop gradient stops, top to bottom
    pub backdrop_stops: [Color32; 5],
    /// Card fill behind the number
    pub card_fill: Color32,
    pub card_border: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub drawer_fill: Color32,
}

impl Default for FestivalTheme {
    fn default() -> Self {
        Self::night()
    }
}

impl FestivalTheme {
    /// The only theme: near-black stage with gold accents
    pub fn night() -> Self {
        Self {
            accent: FESTIVAL_GOLD,
            accent_secondary: FESTIVAL_VIOLET,
            backdrop_stops: [
                Color32::from_rgb(0, 0, 0),
                Color32::from_rgb(10, 10, 10),
                Color32::from_rgb(26, 26, 26),
                Color32::from_rgb(13, 13, 13),
                Color32::from_rgb(0, 0, 0),
            ],
            card_fill: Color32::from_rgba_unmultiplied(12, 10, 4, 200),
            card_border: Color32::from_rgba_unmultiplied(255, 215, 0, 90),
            text_primary: Color32::from_rgb(255, 215, 0),
            text_secondary: Color32::from_rgb(230, 220, 190),
            drawer_fill: Color32::from_rgba_unmultiplied(8, 8, 12, 235),
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::dark();

        visuals.window_fill = self.drawer_fill;
        visuals.panel_fill = self.drawer_fill;

        visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
        visuals.widgets.hovered.weak_bg_fill = with_alpha(self.accent, 0.15);
        visuals.widgets.active.weak_bg_fill = with_alpha(self.accent, 0.3);

        visuals.override_text_color = Some(self.text_secondary);

        ctx.set_visuals(visuals);
    }
}
