//! Pointer-reactive particle field.
//!
//! Particles drift with lazy inertia, get pushed and swirled away from the
//! pointer when it comes close, and wrap around the viewport edges.

use std::cell::Cell;

use rand::Rng;

use crate::models::color::{RgbaColor, FESTIVAL_PALETTE};
use crate::models::viewport::{Viewport, ViewportTier};

pub const REPEL_STRENGTH: f32 = 1.2;
pub const SWIRL_STRENGTH: f32 = 0.6;
/// Velocity multiplier applied every frame.
pub const DAMPING: f32 = 0.98;
/// Velocity components below this get a random nudge.
pub const REST_THRESHOLD: f32 = 0.05;
pub const NUDGE: f32 = 0.15;
pub const INITIAL_SPEED: f32 = 0.4;
pub const MIN_RADIUS: f32 = 0.8;
pub const MAX_RADIUS: f32 = 2.6;
pub const MIN_SHIMMER: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Last known pointer position, scoped to one ambient layer.
///
/// Input tracking writes it, the simulation step reads it; both run on the
/// UI thread within the same frame.
#[derive(Debug, Default)]
pub struct PointerCell(Cell<Option<Point>>);

impl PointerCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, position: Point) {
        self.0.set(Some(position));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<Point> {
        self.0.get()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub radius: f32,
    pub color: RgbaColor,
}

impl Particle {
    pub fn spawn<R: Rng>(viewport: &Viewport, rng: &mut R) -> Self {
        Self {
            position: Point::new(
                rng.random_range(0.0..viewport.width()),
                rng.random_range(0.0..viewport.height()),
            ),
            velocity: Point::new(
                rng.random_range(-INITIAL_SPEED..INITIAL_SPEED),
                rng.random_range(-INITIAL_SPEED..INITIAL_SPEED),
            ),
            radius: rng.random_range(MIN_RADIUS..MAX_RADIUS),
            color: FESTIVAL_PALETTE[rng.random_range(0..FESTIVAL_PALETTE.len())],
        }
    }

    /// Advance one frame.
    pub fn step<R: Rng>(
        &mut self,
        pointer: Option<Point>,
        interaction_radius: f32,
        viewport: &Viewport,
        rng: &mut R,
    ) {
        if let Some(pointer) = pointer {
            self.apply_pointer_force(pointer, interaction_radius);
        }

        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;

        self.velocity.x *= DAMPING;
        self.velocity.y *= DAMPING;

        if self.velocity.x.abs() < REST_THRESHOLD {
            self.velocity.x += rng.random_range(-NUDGE..NUDGE);
        }
        if self.velocity.y.abs() < REST_THRESHOLD {
            self.velocity.y += rng.random_range(-NUDGE..NUDGE);
        }

        self.wrap(viewport);
    }

    fn apply_pointer_force(&mut self, pointer: Point, interaction_radius: f32) {
        let dx = self.position.x - pointer.x;
        let dy = self.position.y - pointer.y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance >= interaction_radius || interaction_radius <= 0.0 {
            return;
        }

        let force = (interaction_radius - distance) / interaction_radius;
        // A particle sitting exactly on the pointer is pushed to the right.
        let angle = if distance > f32::EPSILON {
            dy.atan2(dx)
        } else {
            0.0
        };
        let (sin, cos) = angle.sin_cos();

        self.velocity.x += (cos * REPEL_STRENGTH - sin * SWIRL_STRENGTH) * force;
        self.velocity.y += (sin * REPEL_STRENGTH + cos * SWIRL_STRENGTH) * force;
    }

    /// Toroidal wrap: leaving one edge re-enters at the opposite edge.
    pub fn wrap(&mut self, viewport: &Viewport) {
        if self.position.x > viewport.width() {
            self.position.x = 0.0;
        } else if self.position.x < 0.0 {
            self.position.x = viewport.width();
        }

        if self.position.y > viewport.height() {
            self.position.y = 0.0;
        } else if self.position.y < 0.0 {
            self.position.y = viewport.height();
        }
    }
}

/// The whole particle population for one viewport tier.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    tier: ViewportTier,
}

impl ParticleField {
    pub fn new<R: Rng>(viewport: Viewport, rng: &mut R) -> Self {
        let tier = viewport.tier();
        Self {
            particles: Self::populate(&viewport, tier, rng),
            viewport,
            tier,
        }
    }

    fn populate<R: Rng>(
        viewport: &Viewport,
        tier: ViewportTier,
        rng: &mut R,
    ) -> Vec<Particle> {
        (0..tier.particle_count())
            .map(|_| Particle::spawn(viewport, rng))
            .collect()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn tier(&self) -> ViewportTier {
        self.tier
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Adopt new viewport dimensions. The whole population is regenerated
    /// when the tier (and therefore the count) changes. Returns true if it was.
    pub fn resize<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        self.viewport = viewport;
        let tier = viewport.tier();
        if tier.particle_count() == self.particles.len() {
            self.tier = tier;
            return false;
        }

        log::info!(
            "Viewport tier {:?} -> {:?}; regenerating {} particles",
            self.tier,
            tier,
            tier.particle_count()
        );
        self.tier = tier;
        self.particles = Self::populate(&viewport, tier, rng);
        true
    }

    pub fn step<R: Rng>(&mut self, pointer: &PointerCell, rng: &mut R) {
        let pointer = pointer.get();
        let radius = self.tier.interaction_radius();
        for particle in &mut self.particles {
            particle.step(pointer, radius, &self.viewport, rng);
        }
    }
}

/// Per-frame opacity for the shimmering glow.
pub fn shimmer_opacity<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(MIN_SHIMMER..=1.0)
}
