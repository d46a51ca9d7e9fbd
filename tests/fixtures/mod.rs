// Test fixtures - reusable test data
// Provides consistent dates and configs across the integration tests

#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone};

/// Sample local wall-clock moments
pub mod dates {
    use super::*;

    /// Local time on the given day and hour. Hours chosen by the tests
    /// avoid DST transitions, so the mapping is unambiguous.
    pub fn local(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, hour, min, sec)
            .earliest()
            .expect("fixture time exists in local zone")
    }

    /// One week before the default festival date, mid-afternoon
    pub fn festival_week_before() -> DateTime<Local> {
        local(2026, 7, 10, 15, 30, 0)
    }

    /// Ten seconds before midnight on the eve of the festival
    pub fn festival_eve_late() -> DateTime<Local> {
        local(2026, 7, 16, 23, 59, 50)
    }

    /// Festival day itself
    pub fn festival_day() -> DateTime<Local> {
        local(2026, 7, 17, 9, 0, 0)
    }

    /// A few days after the festival
    pub fn after_festival() -> DateTime<Local> {
        local(2026, 7, 20, 12, 0, 0)
    }

    pub fn leap_year_eve() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 28).expect("valid date")
    }
}

/// Sample configuration files
pub mod configs {
    /// Every key set
    pub const FULL: &str = r#"
target_date = "2027-07-23"
logo_alt = "Dreamfields Logo"
ambience = "keyframes"
reduced_motion = true
motto = ["DREAM", "TOGETHER"]
footer = "See you at the gates"
menu_links = ["Home", "Tickets"]
window_width = 1024.0
window_height = 768.0
"#;

    /// Only the target date
    pub const TARGET_ONLY: &str = r#"target_date = "2026-12-31""#;

    /// Impossible calendar date
    pub const BAD_DATE: &str = r#"target_date = "2026-02-30""#;

    /// Not a date at all
    pub const GARBLED_DATE: &str = r#"target_date = "next summer""#;
}
