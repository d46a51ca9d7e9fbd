//! The countdown card: ornaments, headings, the number and the footer.

use egui::{pos2, vec2, Align2, Color32, FontId, Id, Painter, Pos2, Rect, Stroke, Ui};

use super::a11y;
use super::paint::{quadratic_points, radial_glow};
use crate::services::ambient::decor::{number_glow_at, ornament_shine_at};
use crate::services::countdown::accessible_label;
use crate::ui_egui::theme::{with_alpha, FestivalTheme};

const ORNAMENT_SAMPLES: usize = 24;
/// Ornament design space, 200×40.
const ORNAMENT_SIZE: (f32, f32) = (200.0, 40.0);

/// Everything the card needs to render; it holds no state of its own.
pub struct CardContent<'a> {
    pub days: u32,
    pub subtitle: &'a str,
    pub footer: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrnamentDot {
    pub center: (f32, f32),
    pub radius: f32,
    pub opacity: f32,
}

/// Wave path and dots for the top or bottom ornament, in design space.
pub fn ornament_geometry(bottom: bool) -> (Vec<(f32, f32)>, Vec<OrnamentDot>) {
    let dip = if bottom { 30.0 } else { 10.0 };
    let rise = 40.0 - dip;
    let first = quadratic_points(pos2(10.0, 20.0), pos2(50.0, dip), pos2(100.0, 20.0), ORNAMENT_SAMPLES / 2);
    let second = quadratic_points(pos2(100.0, 20.0), pos2(150.0, rise), pos2(190.0, 20.0), ORNAMENT_SAMPLES / 2);
    let path = first
        .into_iter()
        .chain(second.into_iter().skip(1))
        .map(|p| (p.x, p.y))
        .collect();

    let side = if bottom {
        [(30.0, 25.0), (170.0, 25.0)]
    } else {
        [(50.0, 15.0), (150.0, 15.0)]
    };
    let mut dots = vec![OrnamentDot {
        center: (100.0, 20.0),
        radius: 4.0,
        opacity: 1.0,
    }];
    dots.extend(side.into_iter().map(|center| OrnamentDot {
        center,
        radius: 2.0,
        opacity: 0.6,
    }));
    (path, dots)
}

/// Stroke opacity along the ornament: 0.2 at the ends, 1.0 in the middle.
pub fn ornament_gradient(x: f32) -> f32 {
    let k = 1.0 - ((x / ORNAMENT_SIZE.0) - 0.5).abs() * 2.0;
    0.2 + 0.8 * k.clamp(0.0, 1.0)
}

fn paint_ornament(painter: &Painter, area: Rect, bottom: bool, theme: &FestivalTheme, shine: f32) {
    let scale = area.width() / ORNAMENT_SIZE.0;
    let map = |(x, y): (f32, f32)| -> Pos2 {
        pos2(area.left() + x * scale, area.top() + y * scale)
    };

    let (path, dots) = ornament_geometry(bottom);
    for pair in path.windows(2) {
        let mid_x = (pair[0].0 + pair[1].0) * 0.5;
        painter.line_segment(
            [map(pair[0]), map(pair[1])],
            Stroke::new(2.0 * scale, with_alpha(theme.accent, ornament_gradient(mid_x) * shine)),
        );
    }
    for dot in dots {
        painter.circle_filled(
            map(dot.center),
            dot.radius * scale,
            with_alpha(theme.accent, dot.opacity * shine),
        );
    }
}

/// Card rectangle for a given screen, centred and size-limited.
pub fn card_rect(screen: Rect) -> Rect {
    let width = (screen.width() * 0.8).clamp(240.0, 560.0);
    let height = (screen.height() * 0.6).clamp(260.0, 460.0);
    Rect::from_center_size(screen.center() + vec2(0.0, screen.height() * 0.04), vec2(width, height))
}

pub fn paint_card(
    ui: &mut Ui,
    screen: Rect,
    content: &CardContent<'_>,
    theme: &FestivalTheme,
    t: f32,
    animate: bool,
) {
    let rect = card_rect(screen);
    let painter = ui.painter().clone();
    let (shine, glow) = if animate {
        (ornament_shine_at(t), number_glow_at(t))
    } else {
        (1.0, 0.5)
    };

    painter.rect_filled(rect, 18.0, theme.card_fill);
    painter.rect_stroke(rect, 18.0, Stroke::new(1.5, theme.card_border));

    let inner = rect.shrink(rect.width() * 0.08);
    let ornament_w = inner.width() * 0.7;
    let ornament_h = ornament_w * ORNAMENT_SIZE.1 / ORNAMENT_SIZE.0;
    let top_ornament = Rect::from_center_size(
        pos2(inner.center().x, inner.top() + ornament_h * 0.5),
        vec2(ornament_w, ornament_h),
    );
    let bottom_ornament = Rect::from_center_size(
        pos2(inner.center().x, inner.bottom() - ornament_h * 0.5),
        vec2(ornament_w, ornament_h),
    );
    paint_ornament(&painter, top_ornament, false, theme, shine);
    paint_ornament(&painter, bottom_ornament, true, theme, shine);

    let label_size = (rect.height() * 0.07).clamp(14.0, 28.0);
    let number_size = (rect.height() * 0.32).clamp(56.0, 160.0);
    let subtitle_size = (rect.height() * 0.06).clamp(13.0, 24.0);
    let footer_size = (rect.height() * 0.04).clamp(11.0, 16.0);

    let label_pos = pos2(inner.center().x, top_ornament.bottom() + label_size);
    let label_rect = painter.text(
        label_pos,
        Align2::CENTER_CENTER,
        "DAYS UNTIL",
        FontId::proportional(label_size),
        theme.text_secondary,
    );
    a11y::heading(ui, Id::new("countdown_label"), label_rect, "Days Until", 1);

    let number_text = content.days.to_string();
    let number_pos = pos2(inner.center().x, rect.center().y);
    painter.add(radial_glow(
        number_pos,
        number_size * (0.9 + 0.2 * glow),
        with_alpha(theme.accent, 0.10 + 0.12 * glow),
    ));
    let number_rect = painter.text(
        number_pos,
        Align2::CENTER_CENTER,
        &number_text,
        FontId::proportional(number_size),
        theme.text_primary,
    );
    a11y::timer(
        ui,
        Id::new("countdown_days"),
        number_rect,
        &accessible_label(content.days),
    );

    let subtitle_pos = pos2(inner.center().x, number_rect.bottom() + subtitle_size);
    let subtitle_rect = painter.text(
        subtitle_pos,
        Align2::CENTER_CENTER,
        content.subtitle,
        FontId::proportional(subtitle_size),
        theme.text_secondary,
    );
    a11y::heading(ui, Id::new("countdown_subtitle"), subtitle_rect, content.subtitle, 2);

    painter.text(
        pos2(inner.center().x, bottom_ornament.top() - footer_size),
        Align2::CENTER_CENTER,
        content.footer,
        FontId::proportional(footer_size),
        Color32::from_gray(170),
    );
}

/// Placeholder shown until the first day count is published.
pub fn paint_loading(painter: &Painter, screen: Rect, theme: &FestivalTheme) {
    painter.text(
        screen.center(),
        Align2::CENTER_CENTER,
        "Loading...",
        FontId::proportional(24.0),
        theme.text_primary,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ornament_path_spans_design_space() {
        let (path, dots) = ornament_geometry(false);
        assert_eq!(path.first(), Some(&(10.0, 20.0)));
        assert_eq!(path.last(), Some(&(190.0, 20.0)));
        assert_eq!(dots.len(), 3);
        assert_eq!(dots[0].radius, 4.0);
    }

    #[test]
    fn test_top_and_bottom_ornaments_mirror() {
        let (top, _) = ornament_geometry(false);
        let (bottom, _) = ornament_geometry(true);
        let quarter = top.len() / 4;
        assert!(top[quarter].1 < 20.0);
        assert!(bottom[quarter].1 > 20.0);
    }

    #[test]
    fn test_ornament_gradient_peaks_in_middle() {
        assert!((ornament_gradient(100.0) - 1.0).abs() < 1e-5);
        assert!((ornament_gradient(0.0) - 0.2).abs() < 1e-5);
        assert!((ornament_gradient(200.0) - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_card_rect_fits_small_screens() {
        let screen = Rect::from_min_size(pos2(0.0, 0.0), vec2(320.0, 480.0));
        let card = card_rect(screen);
        assert!(card.width() <= 320.0);
        assert_eq!(card.center().x, screen.center().x);
    }
}
