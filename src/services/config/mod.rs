//! Loading and saving `countdown.toml`.
//!
//! A missing file means "use the defaults". A file that exists but cannot
//! be parsed, or that names an impossible target date, is an error: the
//! countdown refuses to start rather than showing a meaningless number.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::config::CountdownConfig;
use crate::models::target_date::{TargetDate, TargetDateError};

pub const CONFIG_FILE_NAME: &str = "countdown.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid target date in {path}: {source}")]
    InvalidTargetDate {
        path: PathBuf,
        #[source]
        source: TargetDateError,
    },
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where the configuration came from, for the startup log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

pub fn resolve_config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "FestivalCountdown", "FestivalCountdown") {
        dirs.config_dir().join(CONFIG_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for configuration");
        PathBuf::from(CONFIG_FILE_NAME)
    }
}

pub fn load_config(path: &Path) -> Result<(CountdownConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        return Ok((CountdownConfig::default(), ConfigSource::Defaults));
    }

    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    check_target_date(path, &data)?;
    let config = parse_config(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

/// Reports an unusable `target_date` on its own, ahead of the full parse.
/// Syntax errors are left to [`parse_config`].
fn check_target_date(path: &Path, data: &str) -> Result<(), ConfigError> {
    let Ok(table) = data.parse::<toml::Table>() else {
        return Ok(());
    };
    if let Some(toml::Value::String(raw)) = table.get("target_date") {
        raw.parse::<TargetDate>()
            .map_err(|source| ConfigError::InvalidTargetDate {
                path: path.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}

pub fn parse_config(data: &str) -> Result<CountdownConfig, toml::de::Error> {
    toml::from_str(data)
}

pub fn save_config(path: &Path, config: &CountdownConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
