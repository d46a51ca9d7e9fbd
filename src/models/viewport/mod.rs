//! Drawing-surface dimensions and the coarse size tier derived from them.

/// Widths below this many points count as a small viewport.
pub const SMALL_VIEWPORT_BREAKPOINT: f32 = 768.0;

/// Coarse classification of display width controlling particle density
/// and the pointer interaction radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportTier {
    Small,
    Large,
}

impl ViewportTier {
    pub fn from_width(width: f32) -> Self {
        if width < SMALL_VIEWPORT_BREAKPOINT {
            Self::Small
        } else {
            Self::Large
        }
    }

    pub fn particle_count(self) -> usize {
        match self {
            Self::Small => 45,
            Self::Large => 110,
        }
    }

    pub fn interaction_radius(self) -> f32 {
        match self {
            Self::Small => 90.0,
            Self::Large => 140.0,
        }
    }
}

/// A usable drawing surface. Only constructible with finite, positive
/// dimensions, so holding one means there is somewhere to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        (usable(width) && usable(height)).then_some(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn tier(&self) -> ViewportTier {
        ViewportTier::from_width(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundary() {
        assert_eq!(ViewportTier::from_width(767.9), ViewportTier::Small);
        assert_eq!(ViewportTier::from_width(768.0), ViewportTier::Large);
        assert_eq!(ViewportTier::from_width(1920.0), ViewportTier::Large);
    }

    #[test]
    fn test_small_tier_is_sparser() {
        assert!(ViewportTier::Small.particle_count() < ViewportTier::Large.particle_count());
        assert!(
            ViewportTier::Small.interaction_radius() < ViewportTier::Large.interaction_radius()
        );
    }

    #[test]
    fn test_unusable_surfaces_are_rejected() {
        assert!(Viewport::new(0.0, 600.0).is_none());
        assert!(Viewport::new(800.0, -1.0).is_none());
        assert!(Viewport::new(f32::NAN, 600.0).is_none());
        assert!(Viewport::new(f32::INFINITY, 600.0).is_none());
        assert!(Viewport::new(800.0, 600.0).is_some());
    }
}
