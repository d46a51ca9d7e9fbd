//! Painters for the countdown scene, back to front:
//! backdrop, ambient layer, logo or emblem, motto, card.

pub mod a11y;
pub mod ambient;
pub mod backdrop;
pub mod card;
pub mod emblem;
pub mod motto;
pub mod paint;
