use egui::{pos2, vec2, Painter, Rect};
use rand::Rng;

use super::paint::{at, radial_glow};
use crate::models::color::FESTIVAL_GOLD;
use crate::services::ambient::decor::Decor;
use crate::services::ambient::particles::shimmer_opacity;
use crate::services::ambient::ParticleField;
use crate::ui_egui::theme::with_alpha;

/// Glow halo radius relative to the particle core.
const GLOW_SCALE: f32 = 4.0;

pub fn paint_particles<R: Rng>(painter: &Painter, rect: Rect, field: &ParticleField, rng: &mut R) {
    for particle in field.particles() {
        let center = rect.min + vec2(particle.position.x, particle.position.y);
        let opacity = shimmer_opacity(rng);
        painter.add(radial_glow(
            center,
            particle.radius * GLOW_SCALE,
            with_alpha(particle.color, opacity * 0.45),
        ));
        painter.circle_filled(center, particle.radius, with_alpha(particle.color, opacity));
    }
}

pub fn paint_orbs(painter: &Painter, rect: Rect, decor: &Decor, t: f32) {
    for orb in &decor.orbs {
        let frame = orb.frame_at(t);
        let center = at(rect, orb.left, orb.top) + vec2(frame.offset.0, frame.offset.1);
        // Highlight sits up and left of centre.
        let highlight = center - vec2(orb.size * 0.1, orb.size * 0.1);
        painter.add(radial_glow(
            highlight,
            orb.size * 0.5 * frame.scale,
            with_alpha(orb.color, frame.opacity),
        ));
    }
}

pub fn paint_dust(painter: &Painter, rect: Rect, decor: &Decor, t: f32) {
    for mote in &decor.dust {
        let frame = mote.frame_at(t);
        if frame.opacity <= 0.0 {
            continue;
        }
        let base = at(rect, mote.left, mote.top);
        let y = base.y - frame.rise * rect.height();
        // Re-enter from the bottom once a mote rises past the top.
        let y = if y < rect.top() { y + rect.height() } else { y };
        let half = mote.size * 0.5;
        let (sin, cos) = frame.rotation.sin_cos();
        let corners = [(-half, -half), (half, -half), (half, half), (-half, half)]
            .map(|(dx, dy)| pos2(base.x + dx * cos - dy * sin, y + dx * sin + dy * cos));
        painter.add(egui::Shape::convex_polygon(
            corners.to_vec(),
            with_alpha(FESTIVAL_GOLD, frame.opacity * 0.8),
            egui::Stroke::NONE,
        ));
    }
}
