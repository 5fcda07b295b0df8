//! # Configuration
//!
//! Manages the loading and parsing of the application's configuration file (`config.yaml`).
//! Defines the structs for the Matrix login, the tip schedule and the health endpoint.
//! Read once at startup; there is no hot-reload.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveTime;
use chrono_tz::Tz;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main application configuration structure.
/// Matches the layout of `data/config.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub services: ServicesConfig,
    #[serde(default)]
    pub tips: TipsConfig,
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub system: SystemConfig,
}

/// Configuration for various connected services.
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub matrix: MatrixConfig,
}

/// Specific configuration for the Matrix service.
#[derive(Debug, Deserialize, Clone)]
pub struct MatrixConfig {
    pub username: String,
    pub password: String,
    pub homeserver: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Where and when the daily tip is posted.
#[derive(Debug, Deserialize, Clone)]
pub struct TipsConfig {
    #[serde(default = "default_channel")]
    pub channel: String,
    #[serde(default = "default_daily_time")]
    pub daily_time: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Optional YAML file replacing the built-in catalog
    #[serde(default)]
    pub catalog: Option<String>,
}

impl Default for TipsConfig {
    fn default() -> Self {
        Self {
            channel: default_channel(),
            daily_time: default_daily_time(),
            timezone: default_timezone(),
            catalog: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct HealthConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_health_bind")]
    pub bind: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bind: default_health_bind(),
        }
    }
}

/// System-level settings for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct SystemConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
        }
    }
}

fn default_channel() -> String {
    "#general".to_string()
}
fn default_daily_time() -> String {
    "09:00".to_string()
}
fn default_timezone() -> String {
    "Europe/Berlin".to_string()
}
fn default_true() -> bool {
    true
}
fn default_health_bind() -> String {
    "0.0.0.0:3000".to_string()
}
fn default_log_dir() -> String {
    "data".to_string()
}

/// Values supplied on the command line or through the environment.
/// Each `Some` wins over the file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub channel: Option<String>,
    pub daily_time: Option<String>,
    pub timezone: Option<String>,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(channel) = overrides.channel {
            self.tips.channel = channel;
        }
        if let Some(daily_time) = overrides.daily_time {
            self.tips.daily_time = daily_time;
        }
        if let Some(timezone) = overrides.timezone {
            self.tips.timezone = timezone;
        }
    }
}

impl TipsConfig {
    pub fn parsed_daily_time(&self) -> Result<NaiveTime> {
        parse_daily_time(&self.daily_time)
    }

    pub fn parsed_timezone(&self) -> Result<Tz> {
        parse_timezone(&self.timezone)
    }
}

/// Parses `HH:MM` (24h). Seconds are not accepted.
pub fn parse_daily_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .with_context(|| format!("Invalid daily time '{value}', expected HH:MM"))
}

pub fn parse_timezone(value: &str) -> Result<Tz> {
    value
        .trim()
        .parse::<Tz>()
        .map_err(|e| anyhow!("Invalid timezone '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use std::io::Write;

    const MINIMAL: &str = r#"
services:
  matrix:
    homeserver: "https://matrix.example.org"
    username: "tipbot"
    password: "secret"
"#;

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.tips.channel, "#general");
        assert_eq!(config.tips.daily_time, "09:00");
        assert_eq!(config.tips.timezone, "Europe/Berlin");
        assert!(config.tips.catalog.is_none());
        assert!(config.health.enabled);
        assert_eq!(config.health.bind, "0.0.0.0:3000");
        assert_eq!(config.system.log_dir, "data");
        assert!(config.services.matrix.display_name.is_none());
    }

    #[test]
    fn test_full_config() {
        let yaml = r#"
services:
  matrix:
    homeserver: "https://matrix.example.org"
    username: "tipbot"
    password: "secret"
    display_name: "Tip Bot"
tips:
  channel: "!abc:example.org"
  daily_time: "07:30"
  timezone: "America/New_York"
  catalog: "data/tips.yaml"
health:
  enabled: false
  bind: "127.0.0.1:8080"
"#;
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.tips.channel, "!abc:example.org");
        assert_eq!(config.tips.catalog.as_deref(), Some("data/tips.yaml"));
        assert!(!config.health.enabled);
        assert_eq!(config.services.matrix.display_name.as_deref(), Some("Tip Bot"));

        let time = config.tips.parsed_daily_time().unwrap();
        assert_eq!((time.hour(), time.minute()), (7, 30));
        assert_eq!(config.tips.parsed_timezone().unwrap(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_missing_matrix_section_fails() {
        assert!(AppConfig::from_yaml("tips:\n  channel: \"#x\"\n").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let mut config = AppConfig::from_yaml(MINIMAL).unwrap();
        config.apply_overrides(ConfigOverrides {
            channel: Some("#tips:example.org".to_string()),
            daily_time: None,
            timezone: Some("UTC".to_string()),
        });
        assert_eq!(config.tips.channel, "#tips:example.org");
        assert_eq!(config.tips.daily_time, "09:00");
        assert_eq!(config.tips.timezone, "UTC");
    }

    #[test]
    fn test_parse_daily_time() {
        let time = parse_daily_time("09:00").unwrap();
        assert_eq!((time.hour(), time.minute()), (9, 0));
        assert!(parse_daily_time("23:59").is_ok());
        assert!(parse_daily_time("24:00").is_err());
        assert!(parse_daily_time("9am").is_err());
        assert!(parse_daily_time("").is_err());
    }

    #[test]
    fn test_parse_timezone() {
        assert_eq!(parse_timezone("Europe/Berlin").unwrap(), chrono_tz::Europe::Berlin);
        assert!(parse_timezone("Mars/Olympus").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{MINIMAL}").unwrap();
        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.services.matrix.username, "tipbot");

        assert!(AppConfig::load("does/not/exist.yaml").is_err());
    }
}
