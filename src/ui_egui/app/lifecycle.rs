use super::state::ShellState;
use super::CountdownApp;
use crate::models::config::CountdownConfig;
use crate::services::ambient::AmbientLayer;
use crate::services::countdown::{CountdownEngine, SystemClock};
use crate::services::logo::{resolve_logo, LogoAsset};
use crate::ui_egui::theme::FestivalTheme;

impl CountdownApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: CountdownConfig) -> Self {
        let theme = FestivalTheme::night();
        theme.apply_to_context(&cc.egui_ctx);

        let mut logo = resolve_logo(config.logo_src.as_deref(), &config.logo_alt);
        let logo_texture = load_logo_texture(&cc.egui_ctx, &logo);
        if logo.is_image() && logo_texture.is_none() {
            logo = LogoAsset::Emblem;
        }

        let engine = CountdownEngine::new(config.target_date);
        let ambient = AmbientLayer::from_os_rng(config.ambience);
        log::info!(
            "Countdown to {} ({:?} ambience, reduced motion: {})",
            config.target_date,
            config.ambience,
            config.reduced_motion
        );

        Self {
            config,
            theme,
            engine,
            clock: Box::new(SystemClock),
            ambient,
            logo,
            logo_texture,
            state: ShellState::default(),
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        self.refresh_countdown(ctx);
        self.render_menu(ctx);
        self.render_scene(ctx);
        self.mount_if_needed(ctx);
    }

    /// The first frame paints the loading placeholder; the countdown and
    /// the ambient loop start right after it.
    fn mount_if_needed(&mut self, ctx: &egui::Context) {
        if self.state.mounted_at.is_some() {
            return;
        }
        self.engine.mount(self.clock.now());
        self.state.mounted_at = Some(ctx.input(|i| i.time));
        ctx.request_repaint();
    }

    pub(super) fn handle_exit(&mut self) {
        self.engine.teardown();
        self.ambient.teardown();
        log::info!("Festival countdown closed");
    }
}

fn load_logo_texture(ctx: &egui::Context, logo: &LogoAsset) -> Option<egui::TextureHandle> {
    let LogoAsset::Image { image, .. } = logo else {
        return None;
    };

    let size = [image.width as usize, image.height as usize];
    if image.rgba.len() != size[0] * size[1] * 4 {
        log::warn!(
            "Logo pixel buffer does not match {}x{}; using fallback emblem",
            image.width,
            image.height
        );
        return None;
    }

    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.rgba);
    Some(ctx.load_texture("festival_logo", color_image, egui::TextureOptions::LINEAR))
}
