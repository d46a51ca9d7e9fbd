use super::CountdownApp;
use crate::models::config::AmbienceMode;
use crate::models::viewport::Viewport;
use crate::services::ambient::Point;
use crate::services::logo::LogoAsset;
use crate::ui_egui::scene::card::{paint_card, paint_loading, CardContent};
use crate::ui_egui::scene::{a11y, ambient, backdrop, emblem, motto};

impl CountdownApp {
    pub(super) fn render_scene(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let t = self.state.elapsed(now);
        let animate = !self.config.reduced_motion;
        let pulse_t = if animate { t } else { 0.0 };

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let screen = ui.max_rect();
                let painter = ui.painter().clone();
                a11y::region(ui, egui::Id::new("festival_countdown"), screen, "Festival Countdown");

                backdrop::paint_backdrop(&painter, screen, &self.theme, t, animate);

                let mounted = self.state.mounted_at.is_some();
                if mounted && animate {
                    let pointer = ctx
                        .input(|i| i.pointer.hover_pos())
                        .filter(|pos| screen.contains(*pos))
                        .map(|pos| Point::new(pos.x - screen.left(), pos.y - screen.top()));
                    self.ambient.track_pointer(pointer);

                    let viewport = Viewport::new(screen.width(), screen.height());
                    if self.ambient.frame(viewport) {
                        ctx.request_repaint();
                    }

                    match self.ambient.mode() {
                        AmbienceMode::Simulation => {
                            if let (Some(field), rng) = self.ambient.field_with_rng() {
                                ambient::paint_particles(&painter, screen, field, rng);
                            }
                        }
                        AmbienceMode::Keyframes => {
                            ambient::paint_orbs(&painter, screen, self.ambient.decor(), t);
                            ambient::paint_dust(&painter, screen, self.ambient.decor(), t);
                        }
                    }
                }

                match (&self.logo, &self.logo_texture) {
                    (LogoAsset::Image { alt, .. }, Some(texture)) => {
                        let rect = emblem::paint_logo(&painter, screen, texture, pulse_t);
                        a11y::image(ui, egui::Id::new("festival_logo"), rect, alt);
                    }
                    _ => emblem::paint_emblem(&painter, screen, &self.theme, pulse_t),
                }

                // Reduced motion shows the motto fully faded in.
                let motto_t = if animate { t } else { f32::MAX };
                motto::paint_motto(ui, screen, &self.config.motto, &self.theme, motto_t);

                match self.engine.days_remaining() {
                    Some(days) => {
                        let subtitle = self.config.target_date.display_label();
                        let content = CardContent {
                            days,
                            subtitle: &subtitle,
                            footer: &self.config.footer,
                        };
                        paint_card(ui, screen, &content, &self.theme, t, animate);
                    }
                    None => paint_loading(&painter, screen, &self.theme),
                }
            });
    }
}
