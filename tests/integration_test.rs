// Integration tests for configuration loading and the countdown engine
mod fixtures;

use std::fs;

use fixtures::{configs, dates};
use festival_countdown::models::config::{AmbienceMode, CountdownConfig};
use festival_countdown::models::target_date::TargetDate;
use festival_countdown::services::config::{load_config, save_config, ConfigError, ConfigSource};
use festival_countdown::services::countdown::{days_remaining, CountdownEngine};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn engine_from(config: &CountdownConfig) -> CountdownEngine {
    CountdownEngine::new(config.target_date)
}

#[test]
fn test_config_file_drives_engine() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countdown.toml");
    fs::write(&path, configs::FULL).unwrap();

    let (config, source) = load_config(&path).expect("config loads");
    assert_eq!(source, ConfigSource::File(path.clone()));
    assert_eq!(config.ambience, AmbienceMode::Keyframes);
    assert!(config.reduced_motion);
    assert_eq!(config.motto, vec!["DREAM".to_string(), "TOGETHER".to_string()]);
    assert_eq!(config.window_size(), [1024.0, 768.0]);

    let mut engine = engine_from(&config);
    // 2026-07-10 to 2027-07-23 is one year plus 13 days.
    assert_eq!(engine.mount(dates::festival_week_before()), 378);
}

#[test]
fn test_defaults_count_down_to_festival() {
    let dir = tempdir().unwrap();
    let (config, source) = load_config(&dir.path().join("countdown.toml")).unwrap();
    assert_eq!(source, ConfigSource::Defaults);

    let mut week_before = engine_from(&config);
    assert_eq!(week_before.mount(dates::festival_week_before()), 7);

    let mut on_the_day = engine_from(&config);
    assert_eq!(on_the_day.mount(dates::festival_day()), 0);

    let mut afterwards = engine_from(&config);
    assert_eq!(afterwards.mount(dates::after_festival()), 0);
}

#[test]
fn test_midnight_rollover_updates_published_value() {
    let mut engine = CountdownEngine::new(TargetDate::default());
    assert_eq!(engine.mount(dates::festival_eve_late()), 1);

    let before_midnight = engine.tick(dates::local(2026, 7, 16, 23, 59, 55));
    assert!(!before_midnight.changed);
    assert_eq!(engine.days_remaining(), Some(1));

    let after_midnight = engine.tick(dates::local(2026, 7, 17, 0, 0, 1));
    assert!(after_midnight.changed);
    assert_eq!(engine.days_remaining(), Some(0));
    assert!(after_midnight.next_due_in.is_some());
}

#[test]
fn test_teardown_stops_recomputation() {
    let mut engine = CountdownEngine::new(TargetDate::default());
    engine.mount(dates::festival_eve_late());
    engine.teardown();

    let tick = engine.tick(dates::local(2026, 7, 17, 0, 0, 1));
    assert!(!tick.changed);
    assert_eq!(tick.next_due_in, None);
    assert_eq!(engine.days_remaining(), Some(1));
}

#[test]
fn test_invalid_target_date_refuses_to_load() {
    let dir = tempdir().unwrap();
    for (name, body) in [("bad.toml", configs::BAD_DATE), ("garbled.toml", configs::GARBLED_DATE)] {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        match load_config(&path) {
            Err(ConfigError::InvalidTargetDate { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected invalid target date for {name}, got {other:?}"),
        }
    }
}

#[test]
fn test_saved_config_reloads_identically() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("countdown.toml");
    fs::write(dir.path().join("seed.toml"), configs::TARGET_ONLY).unwrap();

    let (config, _) = load_config(&dir.path().join("seed.toml")).unwrap();
    assert_eq!(config.target_date, TargetDate::from_ymd(2026, 12, 31).unwrap());

    save_config(&path, &config).expect("config saves");
    let (reloaded, source) = load_config(&path).unwrap();
    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(reloaded, config);
}

#[test]
fn test_leap_year_span() {
    let target = TargetDate::default();
    assert_eq!(days_remaining(dates::leap_year_eve(), target), 870);
}
