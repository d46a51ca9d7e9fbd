//! Small painting helpers: gradients and curves egui does not ship.

use egui::epaint::{Mesh, Shape};
use egui::{pos2, Color32, Pos2, Rect};

/// Point at fractional coordinates inside `rect`.
pub fn at(rect: Rect, fx: f32, fy: f32) -> Pos2 {
    pos2(
        rect.left() + rect.width() * fx,
        rect.top() + rect.height() * fy,
    )
}

/// Top-to-bottom gradient through evenly spaced `stops`.
pub fn vertical_gradient(rect: Rect, stops: &[Color32]) -> Shape {
    let mut mesh = Mesh::default();
    if stops.len() < 2 {
        if let Some(&only) = stops.first() {
            mesh.add_colored_rect(rect, only);
        }
        return Shape::mesh(mesh);
    }

    let bands = (stops.len() - 1) as f32;
    for (i, &color) in stops.iter().enumerate() {
        let y = rect.top() + rect.height() * (i as f32 / bands);
        mesh.colored_vertex(pos2(rect.left(), y), color);
        mesh.colored_vertex(pos2(rect.right(), y), color);
    }
    for i in 0..(stops.len() as u32 - 1) {
        let base = i * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 3, base + 2);
    }
    Shape::mesh(mesh)
}

/// Soft disc fading from `inner` at the centre to transparent at the rim.
pub fn radial_glow(center: Pos2, radius: f32, inner: Color32) -> Shape {
    radial_ellipse(center, radius, radius, inner)
}

pub fn radial_ellipse(center: Pos2, rx: f32, ry: f32, inner: Color32) -> Shape {
    const SEGMENTS: u32 = 40;
    let mut mesh = Mesh::default();
    mesh.colored_vertex(center, inner);
    for i in 0..SEGMENTS {
        let angle = i as f32 / SEGMENTS as f32 * std::f32::consts::TAU;
        mesh.colored_vertex(
            pos2(center.x + rx * angle.cos(), center.y + ry * angle.sin()),
            Color32::TRANSPARENT,
        );
    }
    for i in 0..SEGMENTS {
        let next = (i + 1) % SEGMENTS;
        mesh.add_triangle(0, 1 + i, 1 + next);
    }
    Shape::mesh(mesh)
}

/// Sample a quadratic Bézier into `samples + 1` points.
pub fn quadratic_points(p0: Pos2, control: Pos2, p1: Pos2, samples: usize) -> Vec<Pos2> {
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| {
            let t = i as f32 / samples as f32;
            let mt = 1.0 - t;
            pos2(
                mt * mt * p0.x + 2.0 * mt * t * control.x + t * t * p1.x,
                mt * mt * p0.y + 2.0 * mt * t * control.y + t * t * p1.y,
            )
        })
        .collect()
}
