//! Keyframe-driven decorations: floating orbs, rising dust motes, sweeping
//! lasers and the slow pulses on the crowd, logo and countdown number.
//!
//! Positions are fractions of the viewport (0.0..=1.0); sizes and drift are
//! in points. Every `*_at` function is pure in `t` (seconds since mount).

use std::f32::consts::PI;

use rand::Rng;

use crate::models::color::{RgbaColor, FESTIVAL_PALETTE};

pub const ORB_COUNT: usize = 15;
pub const DUST_COUNT: usize = 25;
pub const LASER_DELAYS: [f32; 3] = [0.0, 1.5, 3.0];
pub const LASER_PERIOD: f32 = 6.0;
/// Maximum laser tilt either side of vertical, in degrees.
pub const LASER_SWING_DEGREES: f32 = 10.0;

/// Smooth 0 → 1 → 0 over one cycle.
pub fn ping_pong(t: f32, duration: f32, delay: f32) -> f32 {
    if duration <= 0.0 || t < delay {
        return 0.0;
    }
    let phase = ((t - delay) / duration).fract();
    0.5 - 0.5 * (phase * 2.0 * PI).cos()
}

fn lerp(a: f32, b: f32, k: f32) -> f32 {
    a + (b - a) * k
}

#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub color: RgbaColor,
    pub delay: f32,
    pub duration: f32,
    pub drift_x: f32,
    pub drift_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbFrame {
    pub offset: (f32, f32),
    pub scale: f32,
    pub opacity: f32,
}

impl Orb {
    pub fn scatter<R: Rng>(index: usize, rng: &mut R) -> Self {
        Self {
            left: rng.random_range(0.10..0.90),
            top: rng.random_range(0.10..0.90),
            size: rng.random_range(40.0..120.0),
            color: FESTIVAL_PALETTE[index % FESTIVAL_PALETTE.len()],
            delay: rng.random_range(0.0..8.0),
            duration: rng.random_range(8.0..14.0),
            drift_x: rng.random_range(-30.0..30.0),
            drift_y: rng.random_range(-30.0..30.0),
        }
    }

    pub fn frame_at(&self, t: f32) -> OrbFrame {
        let k = ping_pong(t, self.duration, self.delay);
        OrbFrame {
            offset: (self.drift_x * k, self.drift_y * k),
            scale: lerp(1.0, 1.3, k),
            opacity: lerp(0.15, 0.4, k),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DustMote {
    pub left: f32,
    pub top: f32,
    pub size: f32,
    pub delay: f32,
    pub duration: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DustFrame {
    /// Upward travel as a fraction of the viewport height.
    pub rise: f32,
    pub rotation: f32,
    pub opacity: f32,
}

impl DustMote {
    pub fn scatter<R: Rng>(rng: &mut R) -> Self {
        Self {
            left: rng.random_range(0.0..1.0),
            top: rng.random_range(0.0..1.0),
            size: rng.random_range(2.0..5.0),
            delay: rng.random_range(0.0..8.0),
            duration: rng.random_range(6.0..10.0),
        }
    }

    pub fn frame_at(&self, t: f32) -> DustFrame {
        if t < self.delay || self.duration <= 0.0 {
            return DustFrame {
                rise: 0.0,
                rotation: 0.0,
                opacity: 0.0,
            };
        }
        let phase = ((t - self.delay) / self.duration).fract();
        let opacity = if phase < 0.1 {
            phase / 0.1
        } else if phase > 0.9 {
            (1.0 - phase) / 0.1
        } else {
            1.0
        };
        DustFrame {
            rise: phase,
            rotation: phase * 2.0 * PI,
            opacity,
        }
    }
}

/// Randomised decoration set, generated once per mount.
#[derive(Debug, Clone, PartialEq)]
pub struct Decor {
    pub orbs: Vec<Orb>,
    pub dust: Vec<DustMote>,
}

impl Decor {
    pub fn scatter<R: Rng>(rng: &mut R) -> Self {
        Self {
            orbs: (0..ORB_COUNT).map(|i| Orb::scatter(i, rng)).collect(),
            dust: (0..DUST_COUNT).map(|_| DustMote::scatter(rng)).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaserFrame {
    /// Tilt in radians, positive leans right.
    pub angle: f32,
    pub opacity: f32,
}

pub fn laser_at(index: usize, t: f32) -> LaserFrame {
    let delay = LASER_DELAYS[index % LASER_DELAYS.len()];
    let k = ping_pong(t, LASER_PERIOD, delay);
    LaserFrame {
        angle: lerp(-LASER_SWING_DEGREES, LASER_SWING_DEGREES, k).to_radians(),
        opacity: lerp(0.15, 0.3, k),
    }
}

/// Vertical scale and opacity of the crowd silhouette.
pub fn crowd_pulse_at(t: f32) -> (f32, f32) {
    let k = ping_pong(t, 4.0, 0.0);
    (lerp(0.95, 1.05, k), lerp(0.2, 0.35, k))
}

/// Glow intensity (0..=1) behind the countdown number.
pub fn number_glow_at(t: f32) -> f32 {
    ping_pong(t, 3.0, 0.0)
}

pub fn ornament_shine_at(t: f32) -> f32 {
    lerp(0.6, 1.0, ping_pong(t, 3.0, 0.0))
}

/// Watermark opacity and scale.
pub fn logo_pulse_at(t: f32) -> (f32, f32) {
    let k = ping_pong(t, 6.0, 0.0);
    (lerp(0.12, 0.18, k), lerp(1.3, 1.35, k))
}

/// Motto words fade in one after another, 0.15 s apart.
pub fn motto_word_opacity(index: usize, t: f32) -> f32 {
    let start = index as f32 * 0.15;
    ((t - start) / 0.8).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_ping_pong_shape() {
        assert_eq!(ping_pong(0.0, 4.0, 0.0), 0.0);
        assert!((ping_pong(2.0, 4.0, 0.0) - 1.0).abs() < 1e-5);
        assert!(ping_pong(4.0, 4.0, 0.0).abs() < 1e-5);
        assert_eq!(ping_pong(1.0, 4.0, 2.0), 0.0);
    }

    #[test]
    fn test_scatter_counts_and_palette() {
        let decor = Decor::scatter(&mut StdRng::seed_from_u64(11));
        assert_eq!(decor.orbs.len(), ORB_COUNT);
        assert_eq!(decor.dust.len(), DUST_COUNT);
        for (i, orb) in decor.orbs.iter().enumerate() {
            assert_eq!(orb.color, FESTIVAL_PALETTE[i % 5]);
            assert!((0.1..0.9).contains(&orb.left));
            assert!((8.0..14.0).contains(&orb.duration));
        }
    }

    #[test]
    fn test_orb_peaks_mid_cycle() {
        let orb = Orb {
            left: 0.5,
            top: 0.5,
            size: 60.0,
            color: FESTIVAL_PALETTE[0],
            delay: 0.0,
            duration: 10.0,
            drift_x: 20.0,
            drift_y: -10.0,
        };
        let rest = orb.frame_at(0.0);
        assert_eq!(rest.offset, (0.0, 0.0));
        assert!((rest.opacity - 0.15).abs() < 1e-5);

        let peak = orb.frame_at(5.0);
        assert!((peak.scale - 1.3).abs() < 1e-4);
        assert!((peak.opacity - 0.4).abs() < 1e-4);
        assert!((peak.offset.0 - 20.0).abs() < 1e-3);
    }

    #[test]
    fn test_dust_fades_in_and_out() {
        let mote = DustMote {
            left: 0.2,
            top: 0.9,
            size: 3.0,
            delay: 1.0,
            duration: 10.0,
        };
        assert_eq!(mote.frame_at(0.5).opacity, 0.0);
        assert!((mote.frame_at(1.5).opacity - 0.5).abs() < 1e-4);
        assert_eq!(mote.frame_at(6.0).opacity, 1.0);
        assert!((mote.frame_at(10.5).opacity - 0.5).abs() < 1e-3);
        assert!((mote.frame_at(6.0).rise - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_lasers_stay_within_swing() {
        for i in 0..3 {
            for step in 0..60 {
                let frame = laser_at(i, step as f32 * 0.25);
                assert!(frame.angle.abs() <= LASER_SWING_DEGREES.to_radians() + 1e-5);
                assert!((0.15..=0.3 + 1e-5).contains(&frame.opacity));
            }
        }
    }

    #[test]
    fn test_motto_staggered() {
        assert_eq!(motto_word_opacity(0, 0.0), 0.0);
        assert_eq!(motto_word_opacity(0, 1.0), 1.0);
        assert!(motto_word_opacity(5, 1.0) < motto_word_opacity(0, 1.0));
    }
}
