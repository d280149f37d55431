//! User preferences and their JSON persistence.

use std::{
    env,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::services::AveragingWindow;

const DEFAULT_DIR_NAME: &str = ".fintrack";
const HOME_ENV: &str = "FINTRACK_HOME";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default)]
    pub averaging: AveragingWindow,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "ru-RU".into(),
            currency: "RUB".into(),
            averaging: AveragingWindow::default(),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let AveragingWindow::FixedDays { days: 0 } = self.averaging {
            return Err(ConfigError::Invalid(
                "averaging period must be at least one day".into(),
            ));
        }
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency is required".into()));
        }
        Ok(())
    }
}

/// Returns the application data directory, defaulting to `~/.fintrack`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and saves [`Config`] under `<base>/config/config.json`.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl AsRef<Path>) -> Self {
        Self {
            path: base.as_ref().join(CONFIG_DIR).join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored config, or the defaults when none has been saved yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config =
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_keeps_averaging_choice() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        let config = Config {
            averaging: AveragingWindow::DistinctDates,
            log_filter: Some("fintrack_core=debug".into()),
            ..Config::default()
        };
        manager.save(&config).unwrap();
        assert!(!tmp_path(manager.path()).exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn zero_day_window_is_rejected() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        let config = Config {
            averaging: AveragingWindow::FixedDays { days: 0 },
            ..Config::default()
        };
        assert!(matches!(
            manager.save(&config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_serde_error() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }
}
