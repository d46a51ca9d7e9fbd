use egui::{Align2, RichText};

use super::CountdownApp;
use crate::ui_egui::theme::with_alpha;

const DRAWER_WIDTH: f32 = 240.0;

impl CountdownApp {
    /// Hamburger toggle plus the slide-out navigation drawer. Link targets
    /// belong to the host; selecting one is logged and closes the drawer.
    pub(super) fn render_menu(&mut self, ctx: &egui::Context) {
        if self.state.menu.is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.menu.close();
        }

        let accent = self.theme.accent;
        let links = &self.config.menu_links;
        let menu = &mut self.state.menu;

        egui::SidePanel::right("navigation_drawer")
            .resizable(false)
            .exact_width(DRAWER_WIDTH)
            .frame(egui::Frame::none().fill(self.theme.drawer_fill).inner_margin(20.0))
            .show_animated(ctx, menu.is_open(), |ui| {
                ui.add_space(48.0);
                for link in links {
                    let label = RichText::new(link.as_str())
                        .size(18.0)
                        .color(with_alpha(accent, 0.9));
                    if ui.selectable_label(false, label).clicked() {
                        log::info!("Navigation requested: {}", link);
                        menu.close();
                    }
                    ui.add_space(8.0);
                }
            });

        let glyph = if self.state.menu.is_open() { "×" } else { "≡" };
        egui::Area::new(egui::Id::new("menu_toggle"))
            .anchor(Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
            .show(ctx, |ui| {
                let button =
                    egui::Button::new(RichText::new(glyph).size(26.0).color(with_alpha(accent, 1.0)))
                        .frame(false);
                if ui.add(button).on_hover_text("Menu").clicked() {
                    self.state.menu.toggle();
                }
            });
    }
}
