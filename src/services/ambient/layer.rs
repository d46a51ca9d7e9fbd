use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::decor::Decor;
use super::particles::{ParticleField, Point, PointerCell};
use crate::models::config::AmbienceMode;
use crate::models::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayerLifecycle {
    Unmounted,
    Running,
    TornDown,
}

/// Owns the ambient animation state for one countdown instance: the
/// particle field or keyframe decor, the pointer cell and the random
/// source. Drives the per-frame loop from mount until teardown.
pub struct AmbientLayer<R: Rng = StdRng> {
    mode: AmbienceMode,
    rng: R,
    pointer: PointerCell,
    field: Option<ParticleField>,
    decor: Decor,
    lifecycle: LayerLifecycle,
}

impl AmbientLayer<StdRng> {
    pub fn from_os_rng(mode: AmbienceMode) -> Self {
        Self::with_rng(mode, StdRng::from_os_rng())
    }
}

impl<R: Rng> AmbientLayer<R> {
    pub fn with_rng(mode: AmbienceMode, mut rng: R) -> Self {
        let decor = Decor::scatter(&mut rng);
        Self {
            mode,
            rng,
            pointer: PointerCell::new(),
            field: None,
            decor,
            lifecycle: LayerLifecycle::Unmounted,
        }
    }

    pub fn mode(&self) -> AmbienceMode {
        self.mode
    }

    pub fn decor(&self) -> &Decor {
        &self.decor
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn pointer(&self) -> &PointerCell {
        &self.pointer
    }

    /// Particles for drawing plus the random source for per-frame shimmer.
    pub fn field_with_rng(&mut self) -> (Option<&ParticleField>, &mut R) {
        (self.field.as_ref(), &mut self.rng)
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == LayerLifecycle::Running
    }

    /// Start the loop and seed the particles for the first viewport.
    /// Without a usable surface the layer still runs; the field is seeded
    /// by the first frame that has one.
    pub fn mount(&mut self, viewport: Option<Viewport>) {
        if self.lifecycle == LayerLifecycle::TornDown {
            return;
        }
        self.lifecycle = LayerLifecycle::Running;
        if self.mode == AmbienceMode::Simulation {
            if let Some(viewport) = viewport {
                let field = ParticleField::new(viewport, &mut self.rng);
                log::info!(
                    "Ambient simulation mounted with {} particles ({:?})",
                    field.len(),
                    field.tier()
                );
                self.field = Some(field);
            }
        }
    }

    /// Input handler side of the pointer cell. Ignored unless running.
    pub fn track_pointer(&self, position: Option<Point>) {
        if !self.is_running() {
            return;
        }
        match position {
            Some(p) => self.pointer.set(p),
            None => self.pointer.clear(),
        }
    }

    /// One update of the frame loop. Returns whether another frame should
    /// be scheduled.
    pub fn frame(&mut self, viewport: Option<Viewport>) -> bool {
        match self.lifecycle {
            LayerLifecycle::TornDown => return false,
            LayerLifecycle::Unmounted => self.mount(viewport),
            LayerLifecycle::Running => {}
        }

        if self.mode == AmbienceMode::Keyframes {
            return true;
        }

        // No drawing surface this frame: keep the loop alive, do nothing.
        let Some(viewport) = viewport else {
            return true;
        };

        match self.field.as_mut() {
            Some(field) => {
                field.resize(viewport, &mut self.rng);
                field.step(&self.pointer, &mut self.rng);
            }
            None => self.field = Some(ParticleField::new(viewport, &mut self.rng)),
        }
        true
    }

    /// Stop the loop and forget input. Frames after this are no-ops.
    pub fn teardown(&mut self) {
        self.pointer.clear();
        self.field = None;
        self.lifecycle = LayerLifecycle::TornDown;
        log::info!("Ambient layer torn down");
    }
}
