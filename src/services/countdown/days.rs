use chrono::{DateTime, NaiveDate, TimeZone};

use crate::models::target_date::TargetDate;

/// Whole calendar days from `today` until `target`, clamped at zero.
///
/// Both ends are plain calendar dates, so the result is exact regardless
/// of how long the intervening local days are.
pub fn days_remaining(today: NaiveDate, target: TargetDate) -> u32 {
    let diff = (target.date() - today).num_days();
    u32::try_from(diff.max(0)).unwrap_or(u32::MAX)
}

/// Days remaining as seen from the wall-clock moment `now`.
pub fn days_remaining_at<Tz: TimeZone>(now: &DateTime<Tz>, target: TargetDate) -> u32 {
    days_remaining(now.date_naive(), target)
}

/// Text announced by assistive technology for the timer.
pub fn accessible_label(days: u32) -> String {
    format!("{days} days remaining")
}
