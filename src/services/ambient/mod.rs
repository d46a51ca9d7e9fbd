//! Ambient animation behind the countdown card.

pub mod decor;
mod layer;
pub mod particles;

pub use layer::AmbientLayer;
pub use particles::{Particle, ParticleField, Point, PointerCell};
