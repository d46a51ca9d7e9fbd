//! Cancellable arm-once-then-repeat timer aligned to local midnight.
//!
//! The timer never sleeps on its own. The owner polls it with the current
//! time (once per frame, or whenever the UI wakes up) and uses
//! [`MidnightTimer::time_until_due`] to decide when to wake up next.

use chrono::{DateTime, Local, TimeZone};

use crate::utils::date::next_local_midnight;

#[derive(Debug, Clone)]
pub enum TimerPhase<Tz: TimeZone = Local> {
    /// Nothing armed. Polling never fires.
    Idle,
    /// Waiting for the first local midnight after arming.
    OneShot { due_at: DateTime<Tz> },
    /// Firing at every later local midnight. On ordinary days this is
    /// 24 hours after the previous fire; across a DST change it is 23 or 25.
    Repeating { due_at: DateTime<Tz> },
}

#[derive(Debug, Clone)]
pub struct MidnightTimer<Tz: TimeZone = Local> {
    phase: TimerPhase<Tz>,
}

impl<Tz: TimeZone> Default for MidnightTimer<Tz> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Tz: TimeZone> MidnightTimer<Tz> {
    pub fn new() -> Self {
        Self {
            phase: TimerPhase::Idle,
        }
    }

    pub fn phase(&self) -> &TimerPhase<Tz> {
        &self.phase
    }

    pub fn is_armed(&self) -> bool {
        !matches!(self.phase, TimerPhase::Idle)
    }

    pub fn due_at(&self) -> Option<DateTime<Tz>> {
        match &self.phase {
            TimerPhase::Idle => None,
            TimerPhase::OneShot { due_at } | TimerPhase::Repeating { due_at } => {
                Some(due_at.clone())
            }
        }
    }

    /// Arm the one-shot for the next local midnight after `now`,
    /// replacing whatever was pending.
    pub fn arm(&mut self, now: DateTime<Tz>) {
        self.phase = match next_local_midnight(&now) {
            Some(due_at) => {
                log::debug!("Countdown timer armed for {:?}", due_at);
                TimerPhase::OneShot { due_at }
            }
            None => {
                log::warn!("No local midnight follows {:?}; countdown timer left idle", now);
                TimerPhase::Idle
            }
        };
    }

    pub fn cancel(&mut self) {
        if self.is_armed() {
            log::debug!("Countdown timer cancelled");
        }
        self.phase = TimerPhase::Idle;
    }

    /// Returns true when the timer fired. Fires at most once per call;
    /// midnights missed while the process was suspended are coalesced.
    pub fn poll(&mut self, now: DateTime<Tz>) -> bool {
        let Some(due_at) = self.due_at() else {
            return false;
        };
        if now < due_at {
            return false;
        }

        self.phase = match next_local_midnight(&now) {
            Some(next) => {
                log::debug!("Countdown timer fired; next due {:?}", next);
                TimerPhase::Repeating { due_at: next }
            }
            None => {
                log::warn!("No local midnight follows {:?}; countdown timer stopped", now);
                TimerPhase::Idle
            }
        };
        true
    }

    pub fn time_until_due(&self, now: DateTime<Tz>) -> Option<std::time::Duration> {
        let due_at = self.due_at()?;
        Some(
            (due_at - now)
                .to_std()
                .unwrap_or(std::time::Duration::ZERO),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use chrono_tz::Europe::Brussels;
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn brussels(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<chrono_tz::Tz> {
        Brussels.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_idle_timer_never_fires() {
        let mut timer = MidnightTimer::new();
        assert!(!timer.poll(at(2026, 7, 11, 12, 0, 0)));
        assert_eq!(timer.time_until_due(at(2026, 7, 11, 12, 0, 0)), None);
    }

    #[test]
    fn test_fires_within_ten_seconds_of_late_evening() {
        let mut timer = MidnightTimer::new();
        let now = at(2026, 7, 10, 23, 59, 50);
        timer.arm(now);

        let wait = timer.time_until_due(now).unwrap();
        assert!(wait <= std::time::Duration::from_secs(10));
        assert!(!timer.poll(at(2026, 7, 10, 23, 59, 59)));
        assert!(timer.poll(at(2026, 7, 11, 0, 0, 0)));
    }

    #[test]
    fn test_repeats_exactly_one_day_after_firing() {
        let mut timer = MidnightTimer::new();
        timer.arm(at(2026, 7, 10, 23, 59, 50));
        let first_due = timer.due_at().unwrap();

        assert!(timer.poll(first_due));
        assert!(matches!(timer.phase(), TimerPhase::Repeating { .. }));
        assert_eq!(timer.due_at(), Some(first_due + Duration::hours(24)));
        assert!(!timer.poll(first_due + Duration::hours(23)));
        assert!(timer.poll(first_due + Duration::hours(24)));
    }

    #[test]
    fn test_missed_periods_are_coalesced() {
        let mut timer = MidnightTimer::new();
        timer.arm(at(2026, 7, 1, 12, 0, 0));
        let first_due = timer.due_at().unwrap();

        let wake = first_due + Duration::hours(24 * 3 + 5);
        assert!(timer.poll(wake));
        assert!(!timer.poll(wake));
        assert_eq!(timer.due_at(), Some(first_due + Duration::hours(24 * 4)));
    }

    #[test]
    fn test_cancelled_timer_does_not_fire() {
        let mut timer = MidnightTimer::new();
        timer.arm(at(2026, 7, 10, 23, 59, 50));
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.poll(at(2026, 7, 12, 0, 0, 0)));
    }

    #[test]
    fn test_follows_local_midnight_across_fall_back() {
        // Clocks go back one hour in Brussels early on 2026-10-25.
        let mut timer = MidnightTimer::new();
        timer.arm(brussels(2026, 10, 24, 12, 0, 0));
        assert_eq!(timer.due_at(), Some(brussels(2026, 10, 25, 0, 0, 0)));

        assert!(timer.poll(brussels(2026, 10, 25, 0, 0, 1)));
        assert_eq!(timer.due_at(), Some(brussels(2026, 10, 26, 0, 0, 0)));

        // 24 hours after the first fire is still 25 October locally.
        assert!(!timer.poll(brussels(2026, 10, 25, 23, 0, 1)));
        assert!(timer.poll(brussels(2026, 10, 26, 0, 0, 1)));
        assert_eq!(timer.due_at(), Some(brussels(2026, 10, 27, 0, 0, 0)));
    }

    #[test]
    fn test_follows_local_midnight_across_spring_forward() {
        // Clocks go forward one hour in Brussels early on 2026-03-29.
        let mut timer = MidnightTimer::new();
        timer.arm(brussels(2026, 3, 28, 18, 0, 0));
        assert!(timer.poll(brussels(2026, 3, 29, 0, 0, 1)));

        let due = timer.due_at().unwrap();
        assert_eq!(due, brussels(2026, 3, 30, 0, 0, 0));
        assert_eq!(due - brussels(2026, 3, 29, 0, 0, 0), Duration::hours(23));
    }
}
