//! Report configuration for the command-line driver.

use std::path::PathBuf;

use chrono::NaiveTime;

/// Environment variable holding the ground time threshold (`HH:MM`).
pub const MAX_GROUND_TIME_VAR: &str = "FLIGHT_FILTER_MAX_GROUND_TIME";

/// Environment variable holding the path of a JSON flight file.
pub const DATA_PATH_VAR: &str = "FLIGHT_FILTER_DATA";

/// Error returned when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Threshold is not a valid `HH:MM` time of day
    #[error("invalid {var} value {value:?}: expected HH:MM")]
    InvalidThreshold { var: &'static str, value: String },
}

/// Configuration parameters for the filter report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Flights with this much ground time or more are excluded.
    pub max_ground_time: NaiveTime,

    /// JSON flight file to load. Sample flights are used when unset.
    pub data_path: Option<PathBuf>,
}

impl ReportConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_ground_time: NaiveTime, data_path: Option<PathBuf>) -> Self {
        Self {
            max_ground_time,
            data_path,
        }
    }

    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a configuration, reading overrides through `lookup`.
    ///
    /// Unset or empty values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        if let Some(value) = non_empty(MAX_GROUND_TIME_VAR) {
            config.max_ground_time = NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(
                |_| ConfigError::InvalidThreshold {
                    var: MAX_GROUND_TIME_VAR,
                    value: value.clone(),
                },
            )?;
        }

        if let Some(value) = non_empty(DATA_PATH_VAR) {
            config.data_path = Some(PathBuf::from(value));
        }

        Ok(config)
    }

    /// Returns the threshold formatted as `HH:MM`.
    pub fn max_ground_time_label(&self) -> String {
        self.max_ground_time.format("%H:%M").to_string()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            // 2 hours
            max_ground_time: NaiveTime::from_hms_opt(2, 0, 0).unwrap_or_default(),
            data_path: None,
        }
    }
}
