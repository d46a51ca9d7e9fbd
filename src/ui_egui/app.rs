mod lifecycle;
mod menu;
mod refresh;
mod render;
mod state;

use self::state::ShellState;
use crate::models::config::CountdownConfig;
use crate::services::ambient::AmbientLayer;
use crate::services::countdown::{Clock, CountdownEngine};
use crate::services::logo::LogoAsset;
use crate::ui_egui::theme::FestivalTheme;

pub struct CountdownApp {
    config: CountdownConfig,
    /// Currently applied theme colors
    theme: FestivalTheme,
    /// Days-remaining publisher and its midnight timer
    engine: CountdownEngine,
    clock: Box<dyn Clock>,
    /// Particle simulation or keyframe decor behind the card
    ambient: AmbientLayer,
    logo: LogoAsset,
    logo_texture: Option<egui::TextureHandle>,
    /// Menu toggle and mount bookkeeping
    state: ShellState,
}

impl eframe::App for CountdownApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.handle_exit();
    }
}
