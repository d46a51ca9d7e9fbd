//! Stage backdrop: layered gradients, sweeping lasers, stage columns and
//! the crowd silhouette.

use egui::epaint::Shape;
use egui::{pos2, Color32, Painter, Pos2, Rect, Stroke};

use super::paint::{at, radial_glow, vertical_gradient};
use crate::services::ambient::decor::{crowd_pulse_at, laser_at, ping_pong, LASER_DELAYS};
use crate::ui_egui::theme::{with_alpha, FestivalTheme};

const COLUMN_COUNT: usize = 4;

pub fn paint_backdrop(painter: &Painter, rect: Rect, theme: &FestivalTheme, t: f32, animate: bool) {
    painter.add(vertical_gradient(rect, &theme.backdrop_stops));

    let span = rect.width().max(rect.height());
    painter.add(radial_glow(
        at(rect, 0.2, 0.8),
        span * 0.5,
        Color32::from_rgba_unmultiplied(20, 20, 20, 204),
    ));
    painter.add(radial_glow(
        at(rect, 0.8, 0.2),
        span * 0.5,
        Color32::from_rgba_unmultiplied(30, 30, 30, 153),
    ));
    painter.add(radial_glow(
        at(rect, 0.5, 0.5),
        span * 0.7,
        Color32::from_rgba_unmultiplied(40, 40, 40, 77),
    ));

    let t = if animate { t } else { 0.0 };
    paint_lasers(painter, rect, theme, t);
    paint_columns(painter, rect, theme, t);
    paint_crowd(painter, rect, t);
}

fn paint_lasers(painter: &Painter, rect: Rect, theme: &FestivalTheme, t: f32) {
    let origin = pos2(rect.center().x, rect.top());
    let length = rect.height() * 1.1;
    for index in 0..LASER_DELAYS.len() {
        let frame = laser_at(index, t);
        let half_width = 0.012_f32;
        let tip = |offset: f32| {
            let angle = frame.angle + offset;
            pos2(
                origin.x + length * angle.sin(),
                origin.y + length * angle.cos(),
            )
        };
        let color = if index % 2 == 0 {
            theme.accent
        } else {
            theme.accent_secondary
        };
        painter.add(Shape::convex_polygon(
            vec![origin, tip(-half_width), tip(half_width)],
            with_alpha(color, frame.opacity * 0.6),
            Stroke::NONE,
        ));
    }
}

fn paint_columns(painter: &Painter, rect: Rect, theme: &FestivalTheme, t: f32) {
    let glow = 0.15 + 0.05 * ping_pong(t, 4.0, 0.0);
    let column_width = (rect.width() * 0.035).clamp(14.0, 48.0);
    let column_height = rect.height() * 0.38;
    for i in 0..COLUMN_COUNT {
        let fx = 0.14 + 0.24 * i as f32;
        let base = at(rect, fx, 1.0);
        let column = Rect::from_min_max(
            pos2(base.x - column_width * 0.5, base.y - column_height),
            pos2(base.x + column_width * 0.5, base.y),
        );
        painter.add(radial_glow(
            column.center_top(),
            column_width * 2.5,
            with_alpha(theme.accent, glow),
        ));
        painter.rect_filled(column, 3.0, Color32::from_rgb(18, 16, 12));
        painter.rect_stroke(column, 3.0, Stroke::new(1.0, with_alpha(theme.accent, glow)));
    }
}

fn paint_crowd(painter: &Painter, rect: Rect, t: f32) {
    let (scale_y, opacity) = crowd_pulse_at(t);
    let height = rect.height() * 0.12 * scale_y;
    let bottom = rect.bottom();
    let heads = 28;
    let step = rect.width() / heads as f32;
    let alpha = (opacity * 255.0) as u8;
    let fill = Color32::from_rgba_unmultiplied(0, 0, 0, alpha);

    painter.rect_filled(
        Rect::from_min_max(pos2(rect.left(), bottom - height * 0.55), rect.right_bottom()),
        0.0,
        fill,
    );
    for i in 0..heads {
        // Fixed per-index jitter, stable across frames.
        let jitter = ((i * 37 % 11) as f32 / 11.0) * 0.45;
        let center: Pos2 = pos2(
            rect.left() + step * (i as f32 + 0.5),
            bottom - height * (0.6 + jitter),
        );
        painter.circle_filled(center, step * 0.32, fill);
    }
}
