//! TOML-based application configuration.
//!
//! Stores:
//! - the bell schedule used by the ticker
//! - the student's own class names per A/B day
//! - ticker polling cadence
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, CoreError, Result, ValidationError};
use crate::schedule::{BellSchedule, CustomSchedule, DayType, PERIOD_COUNT};

/// Ticker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerConfig {
    /// How often the host re-renders the ticker.
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bell: BellSchedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_schedule: Option<CustomSchedule>,
    #[serde(default)]
    pub ticker: TickerConfig,
}

fn default_refresh_ms() -> u64 {
    1000
}

impl Default for TickerConfig {
    fn default() -> Self {
        Self {
            refresh_ms: default_refresh_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bell: BellSchedule::standard(),
            custom_schedule: None,
            ticker: TickerConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = match current {
                serde_json::Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                other => other.get(part)?,
            };
        }
        Some(current)
    }

    /// Parse `value` into the JSON type already stored at `key`.
    fn parse_like(
        existing: &serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<serde_json::Value, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };
        Ok(match existing {
            serde_json::Value::Bool(_) => serde_json::Value::Bool(
                value
                    .parse::<bool>()
                    .map_err(|e| invalid(e.to_string()))?,
            ),
            serde_json::Value::Number(_) => {
                let n = value
                    .parse::<u64>()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                serde_json::Value::Number(n.into())
            }
            serde_json::Value::Object(_) | serde_json::Value::Array(_) | serde_json::Value::Null => {
                serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
            }
            serde_json::Value::String(_) => serde_json::Value::String(value.into()),
        })
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        if key.is_empty() {
            return Err(unknown());
        }
        let mut parts = key.split('.').peekable();

        let mut current = root;
        while let Some(part) = parts.next() {
            let slot = match current {
                serde_json::Value::Array(items) => {
                    let idx = part.parse::<usize>().map_err(|_| unknown())?;
                    items.get_mut(idx).ok_or_else(unknown)?
                }
                serde_json::Value::Object(obj) => obj.get_mut(part).ok_or_else(unknown)?,
                _ => return Err(unknown()),
            };

            if parts.peek().is_none() {
                *slot = Self::parse_like(slot, key, value)?;
                return Ok(());
            }
            current = slot;
        }

        Err(unknown())
    }

    fn path_in(dir: &Path) -> PathBuf {
        dir.join("config.toml")
    }

    /// Load from `dir`, writing and returning the default if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed or fails
    /// validation, or if the default config cannot be written.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = Self::path_in(dir);
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no config found, writing defaults");
                let cfg = Self::default();
                cfg.save_to(dir)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path,
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Load from the data directory.
    ///
    /// # Errors
    ///
    /// See [`Config::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&data_dir()?)
    }

    /// Persist to `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let path = Self::path_in(dir);
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// See [`Config::save_to`].
    pub fn save(&self) -> Result<()> {
        self.save_to(&data_dir()?)
    }

    /// # Errors
    ///
    /// Returns the first problem found in the bell schedule or ticker settings.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bell.validate()?;
        if self.ticker.refresh_ms == 0 {
            return Err(ValidationError::InvalidValue {
                field: "ticker.refresh_ms".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key. Array elements
    /// are addressed by index, e.g. `bell.blocks.0.start`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key. The change is applied only if the
    /// resulting config validates. Does not write to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// or the result is not a valid configuration.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Set the student's class name for a 1-indexed period.
    ///
    /// # Errors
    ///
    /// Returns an error for weekend day types or periods outside 1..=4.
    pub fn set_class_name(&mut self, day_type: DayType, period: usize, name: &str) -> Result<()> {
        if !(1..=PERIOD_COUNT).contains(&period) {
            return Err(CoreError::Validation(ValidationError::InvalidValue {
                field: "period".into(),
                message: format!("expected 1..={PERIOD_COUNT}, got {period}"),
            }));
        }
        if !day_type.is_school_day() {
            return Err(CoreError::Validation(ValidationError::InvalidValue {
                field: "day".into(),
                message: "weekends have no class periods".into(),
            }));
        }
        let custom = self.custom_schedule.get_or_insert_with(CustomSchedule::default);
        let names = if day_type == DayType::A {
            &mut custom.a
        } else {
            &mut custom.b
        };
        names[period - 1] = name.trim().to_string();
        Ok(())
    }
}
