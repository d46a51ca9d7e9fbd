use chrono::{DateTime, Local};

use super::days::days_remaining_at;
use super::timer::MidnightTimer;
use crate::models::target_date::TargetDate;

/// Source of the current wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineTick {
    /// The published day count changed on this tick.
    pub changed: bool,
    /// How long the caller may sleep before the next recomputation.
    pub next_due_in: Option<std::time::Duration>,
}

/// Publishes the days remaining until a target date and keeps the value
/// fresh across local midnights.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    target: TargetDate,
    days: Option<u32>,
    timer: MidnightTimer,
    torn_down: bool,
}

impl CountdownEngine {
    pub fn new(target: TargetDate) -> Self {
        Self {
            target,
            days: None,
            timer: MidnightTimer::new(),
            torn_down: false,
        }
    }

    pub fn target(&self) -> TargetDate {
        self.target
    }

    /// `None` until [`CountdownEngine::mount`] has run.
    pub fn days_remaining(&self) -> Option<u32> {
        self.days
    }

    pub fn timer(&self) -> &MidnightTimer {
        &self.timer
    }

    /// Compute and publish immediately, then arm the midnight timer.
    pub fn mount(&mut self, now: DateTime<Local>) -> u32 {
        self.torn_down = false;
        let days = self.recompute(now);
        self.timer.arm(now);
        log::info!(
            "Countdown mounted: {} day(s) until {}",
            days,
            self.target
        );
        days
    }

    pub fn tick(&mut self, now: DateTime<Local>) -> EngineTick {
        if self.torn_down || self.days.is_none() {
            return EngineTick::default();
        }

        let mut changed = false;
        if self.timer.poll(now) {
            let before = self.days;
            let days = self.recompute(now);
            changed = before != Some(days);
            log::info!("Midnight recompute: {} day(s) remaining", days);
        }

        EngineTick {
            changed,
            next_due_in: self.timer.time_until_due(now),
        }
    }

    pub fn tick_with_clock(&mut self, clock: &dyn Clock) -> EngineTick {
        self.tick(clock.now())
    }

    /// Swap the target. The pending timer is cancelled and re-armed so
    /// nothing scheduled for the old configuration can fire.
    pub fn set_target(&mut self, target: TargetDate, now: DateTime<Local>) -> u32 {
        self.timer.cancel();
        self.target = target;
        if self.torn_down {
            return self.days.unwrap_or(0);
        }
        let days = self.recompute(now);
        self.timer.arm(now);
        log::info!("Countdown target changed to {}", target);
        days
    }

    /// Release the timer. Later ticks do nothing.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.torn_down = true;
        log::info!("Countdown engine torn down");
    }

    fn recompute(&mut self, now: DateTime<Local>) -> u32 {
        let days = days_remaining_at(&now, self.target);
        self.days = Some(days);
        days
    }
}
