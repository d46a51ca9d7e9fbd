//! The calendar date the countdown runs towards.
//!
//! A `TargetDate` has no time-of-day component. It is interpreted in the
//! viewer's local timezone by the countdown engine.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Default festival day used when no configuration overrides it.
pub const DEFAULT_TARGET_DATE: &str = "2026-07-17";

const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetDateError {
    #[error("target date `{0}` is not in YYYY-MM-DD form")]
    Malformed(String),
    #[error("target date `{0}` is not a real calendar date")]
    OutOfRange(String),
}

/// Immutable festival date, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetDate(NaiveDate);

impl TargetDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Subtitle text shown under the number, e.g. `17 JULY 2026`.
    pub fn display_label(&self) -> String {
        let month = MONTH_NAMES[self.0.month0() as usize];
        format!("{} {} {}", self.0.day(), month, self.0.year())
    }
}

impl Default for TargetDate {
    fn default() -> Self {
        // 2026-07-17 always exists
        Self(NaiveDate::from_ymd_opt(2026, 7, 17).unwrap_or(NaiveDate::MIN))
    }
}

impl FromStr for TargetDate {
    type Err = TargetDateError;

    /// Parses strictly `YYYY-MM-DD`; anything else is rejected rather than
    /// silently collapsing to a degenerate countdown.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let mut parts = trimmed.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TargetDateError::Malformed(value.to_string()));
        };

        if y.len() != 4 || m.len() != 2 || d.len() != 2 {
            return Err(TargetDateError::Malformed(value.to_string()));
        }

        let parse_digits = |part: &str| -> Result<u32, TargetDateError> {
            if !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(TargetDateError::Malformed(value.to_string()));
            }
            part.parse::<u32>()
                .map_err(|_| TargetDateError::Malformed(value.to_string()))
        };

        let year = parse_digits(y)? as i32;
        let month = parse_digits(m)?;
        let day = parse_digits(d)?;

        Self::from_ymd(year, month, day).ok_or_else(|| TargetDateError::OutOfRange(value.to_string()))
    }
}

impl fmt::Display for TargetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl Serialize for TargetDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TargetDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
