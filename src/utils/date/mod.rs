// Date utility functions

use chrono::{DateTime, Duration, LocalResult, NaiveDate, TimeZone};

/// Local midnight at the start of `date`.
///
/// Ambiguous midnights (clock set back) resolve to the earlier instant.
/// Where midnight does not exist (clock jumps forward over it) the first
/// valid instant of the day is used, probed in 30 minute steps.
pub fn midnight_of<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    let start = date.and_hms_opt(0, 0, 0)?;
    for step in 0..=48 {
        let candidate = start + Duration::minutes(30 * step);
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return Some(dt),
            LocalResult::Ambiguous(earliest, _) => return Some(earliest),
            LocalResult::None => continue,
        }
    }
    None
}

/// The next local midnight strictly after `now`.
pub fn next_local_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let tomorrow = now.date_naive().succ_opt()?;
    midnight_of(tomorrow, &now.timezone())
}
