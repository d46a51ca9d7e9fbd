// Countdown configuration model
// Deserialized from countdown.toml; every key is optional

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::target_date::TargetDate;

/// Which ambient animation layer is painted behind the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AmbienceMode {
    /// Pointer-reactive particle simulation.
    #[default]
    Simulation,
    /// Keyframe-driven floating orbs and rising dust motes.
    Keyframes,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CountdownConfig {
    pub target_date: TargetDate,
    pub logo_src: Option<PathBuf>,
    pub logo_alt: String,
    pub ambience: AmbienceMode,
    pub reduced_motion: bool,
    pub motto: Vec<String>,
    pub footer: String,
    pub menu_links: Vec<String>,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            target_date: TargetDate::default(),
            logo_src: None,
            logo_alt: "Festival Logo".to_string(),
            ambience: AmbienceMode::default(),
            reduced_motion: false,
            motto: ["LIVE", "TODAY", "LOVE", "TOMORROW", "UNITE", "FOREVER"]
                .into_iter()
                .map(String::from)
                .collect(),
            footer: "The Journey to The Dream Begins".to_string(),
            menu_links: ["Home", "Line-up", "Tickets", "Travel", "FAQ"]
                .into_iter()
                .map(String::from)
                .collect(),
            window_width: 1200.0,
            window_height: 800.0,
        }
    }
}

impl CountdownConfig {
    /// Initial window size, falling back to defaults for nonsense values.
    pub fn window_size(&self) -> [f32; 2] {
        let defaults = Self::default();
        let pick = |value: f32, fallback: f32| {
            if value.is_finite() && value >= 320.0 {
                value
            } else {
                fallback
            }
        };
        [
            pick(self.window_width, defaults.window_width),
            pick(self.window_height, defaults.window_height),
        ]
    }
}
