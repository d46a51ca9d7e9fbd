// Property-based tests for the day count and the particle simulation
// Random dates and viewports check invariants that hold for every input

use chrono::{Duration, NaiveDate};
use festival_countdown::models::target_date::TargetDate;
use festival_countdown::models::viewport::Viewport;
use festival_countdown::services::ambient::{ParticleField, Point, PointerCell};
use festival_countdown::services::countdown::days_remaining;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid epoch") + Duration::days(offset)
    })
}

proptest! {
    /// Property: the count never increases as the calendar advances
    #[test]
    fn prop_days_never_increase(today in date_strategy(), target in date_strategy(), step in 1i64..400) {
        let target = TargetDate::new(target);
        let later = today + Duration::days(step);
        prop_assert!(days_remaining(later, target) <= days_remaining(today, target));
    }

    /// Property: repeating the computation yields the same count
    #[test]
    fn prop_days_idempotent(today in date_strategy(), target in date_strategy()) {
        let target = TargetDate::new(target);
        prop_assert_eq!(days_remaining(today, target), days_remaining(today, target));
    }

    /// Property: on or after the target the count is exactly zero
    #[test]
    fn prop_zero_on_and_after_target(target in date_strategy(), after in 0i64..5_000) {
        let today = target + Duration::days(after);
        prop_assert_eq!(days_remaining(today, TargetDate::new(target)), 0);
    }

    /// Property: before the target the count is the calendar-day difference
    #[test]
    fn prop_exact_difference_before_target(target in date_strategy(), before in 1i64..5_000) {
        let today = target - Duration::days(before);
        prop_assert_eq!(days_remaining(today, TargetDate::new(target)) as i64, before);
    }

    /// Property: every particle stays on the surface after any number of steps
    #[test]
    fn prop_particles_stay_on_surface(
        width in 50.0f32..2_000.0,
        height in 50.0f32..1_500.0,
        seed in any::<u64>(),
        steps in 1usize..120,
        pointer in prop::option::of((0.0f32..2_000.0, 0.0f32..1_500.0)),
    ) {
        let viewport = Viewport::new(width, height).expect("positive dimensions");
        let mut rng = StdRng::seed_from_u64(seed);
        let mut field = ParticleField::new(viewport, &mut rng);
        let cell = PointerCell::new();
        if let Some((x, y)) = pointer {
            cell.set(Point::new(x, y));
        }

        for _ in 0..steps {
            field.step(&cell, &mut rng);
        }

        for particle in field.particles() {
            prop_assert!((0.0..=width).contains(&particle.position.x));
            prop_assert!((0.0..=height).contains(&particle.position.y));
        }
    }

    /// Property: the population always matches the viewport tier
    #[test]
    fn prop_population_tracks_tier(first in 100.0f32..2_000.0, second in 100.0f32..2_000.0, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let start = Viewport::new(first, 600.0).expect("positive dimensions");
        let mut field = ParticleField::new(start, &mut rng);
        prop_assert_eq!(field.len(), start.tier().particle_count());

        let next = Viewport::new(second, 600.0).expect("positive dimensions");
        field.resize(next, &mut rng);
        prop_assert_eq!(field.len(), next.tier().particle_count());
    }
}
