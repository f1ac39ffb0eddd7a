use chrono::TimeDelta;
use log::LevelFilter;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the recommendation service
    pub api_url: String,
    pub notification_seconds: u32,
    pub log_level: LogLevel,
}

impl Settings {
    /// Parses a settings document. Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn notification_lifetime(&self) -> TimeDelta {
        TimeDelta::seconds(i64::from(self.notification_seconds))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            notification_seconds: 3,
            log_level: LogLevel::Info,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Invalid(#[from] serde_json::Error),
}
