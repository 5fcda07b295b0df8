//! # Command Line
//!
//! `clap` arguments. Each flag also reads from an environment variable and wins over the config file.

use clap::Parser;

use crate::domain::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "tipbot", version, about = "Posts a rotating daily tip to a Matrix room")]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "TIPBOT_CONFIG", default_value = "data/config.yaml")]
    pub config: String,

    /// Destination room id or alias for the daily tip
    #[arg(long, env = "TIPBOT_CHANNEL")]
    pub channel: Option<String>,

    /// Daily post time as HH:MM
    #[arg(long, env = "TIPBOT_DAILY_TIME")]
    pub daily_time: Option<String>,

    /// IANA timezone for the daily post, e.g. Europe/Berlin
    #[arg(long, env = "TIPBOT_TIMEZONE")]
    pub timezone: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            channel: self.channel.clone(),
            daily_time: self.daily_time.clone(),
            timezone: self.timezone.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tipbot"]).unwrap();
        assert_eq!(cli.config, "data/config.yaml");
        let overrides = cli.overrides();
        assert!(overrides.channel.is_none());
        assert!(overrides.daily_time.is_none());
        assert!(overrides.timezone.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "tipbot",
            "--config",
            "/etc/tipbot.yaml",
            "--channel",
            "#tips",
            "--daily-time",
            "08:15",
            "--timezone",
            "UTC",
        ])
        .unwrap();
        assert_eq!(cli.config, "/etc/tipbot.yaml");
        let overrides = cli.overrides();
        assert_eq!(overrides.channel.as_deref(), Some("#tips"));
        assert_eq!(overrides.daily_time.as_deref(), Some("08:15"));
        assert_eq!(overrides.timezone.as_deref(), Some("UTC"));
    }
}
