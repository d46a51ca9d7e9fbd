//! Logo watermark, or the procedural emblem when no logo is available.

use egui::epaint::{Mesh, Shape};
use egui::{pos2, vec2, Color32, Painter, Pos2, Rect, Stroke, TextureHandle};

use crate::services::ambient::decor::logo_pulse_at;
use crate::ui_egui::theme::{with_alpha, FestivalTheme};

/// Star outline in the emblem's 200×200 design space.
pub const STAR_POINTS: [(f32, f32); 10] = [
    (100.0, 20.0),
    (110.0, 60.0),
    (150.0, 60.0),
    (120.0, 85.0),
    (130.0, 125.0),
    (100.0, 100.0),
    (70.0, 125.0),
    (80.0, 85.0),
    (50.0, 60.0),
    (90.0, 60.0),
];

/// Interior point every star vertex can see, used as the fan centre.
const STAR_CENTER: (f32, f32) = (100.0, 78.0);

/// Emblem square centred in `rect`, sized to its shorter side.
pub fn emblem_rect(rect: Rect, scale: f32) -> Rect {
    let side = rect.width().min(rect.height()) * 0.6 * scale;
    Rect::from_center_size(rect.center(), vec2(side, side))
}

fn map(square: Rect, (x, y): (f32, f32)) -> Pos2 {
    pos2(
        square.left() + square.width() * x / 200.0,
        square.top() + square.height() * y / 200.0,
    )
}

pub fn paint_emblem(painter: &Painter, rect: Rect, theme: &FestivalTheme, t: f32) {
    let (_, scale) = logo_pulse_at(t);
    let square = emblem_rect(rect, scale / 1.3);
    let unit = square.width() / 200.0;
    let center = square.center();

    for (radius, color) in [
        (80.0, theme.accent),
        (60.0, theme.accent_secondary),
        (40.0, theme.accent),
    ] {
        painter.circle_stroke(
            center,
            radius * unit,
            Stroke::new(2.0 * unit, with_alpha(color, 0.3)),
        );
    }

    let outline: Vec<Pos2> = STAR_POINTS.iter().map(|&p| map(square, p)).collect();
    let mut fan = Mesh::default();
    let fill = with_alpha(theme.accent, 0.2);
    fan.colored_vertex(map(square, STAR_CENTER), fill);
    for &point in &outline {
        fan.colored_vertex(point, fill);
    }
    let n = outline.len() as u32;
    for i in 0..n {
        fan.add_triangle(0, 1 + i, 1 + (i + 1) % n);
    }
    painter.add(Shape::mesh(fan));
    painter.add(Shape::closed_line(
        outline,
        Stroke::new(unit.max(0.5), with_alpha(theme.accent, 0.4)),
    ));
}

pub fn paint_logo(painter: &Painter, rect: Rect, texture: &TextureHandle, t: f32) -> Rect {
    let (opacity, scale) = logo_pulse_at(t);
    let [w, h] = texture.size();
    let aspect = if h == 0 { 1.0 } else { w as f32 / h as f32 };
    let side = rect.width().min(rect.height()) * 0.5 * scale;
    let size = if aspect >= 1.0 {
        vec2(side, side / aspect)
    } else {
        vec2(side * aspect, side)
    };
    let target = Rect::from_center_size(rect.center(), size);
    let alpha = (opacity * 255.0).round() as u8;
    painter.image(
        texture.id(),
        target,
        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
        Color32::from_white_alpha(alpha),
    );
    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emblem_rect_is_square_and_centred() {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(1000.0, 500.0));
        let square = emblem_rect(rect, 1.0);
        assert_eq!(square.width(), square.height());
        assert_eq!(square.center(), rect.center());
        assert!((square.width() - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_star_fan_centre_is_inside_outline() {
        let (cx, cy) = STAR_CENTER;
        let ys: Vec<f32> = STAR_POINTS.iter().map(|p| p.1).collect();
        assert!(ys.iter().cloned().fold(f32::MAX, f32::min) < cy);
        assert!(ys.iter().cloned().fold(f32::MIN, f32::max) > cy);
        assert!(cx > 90.0 && cx < 110.0);
    }
}
