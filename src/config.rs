use std::{path::PathBuf, time::Duration};

use crate::{
    error::{config::ConfigError, AppError},
    util::parse::parse_u64_from_string,
};

const DEFAULT_STATS_API_URL: &str = "https://api.psrewired.com/us/api";
const DEFAULT_STATS_APPLICATION_ID: u64 = 21624;
const DEFAULT_MESSAGE_ID_FILE: &str = "message_id.txt";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
const DEFAULT_COMMAND_PREFIX: &str = "!";
const DEFAULT_CATCH_ALL_LOBBY_NAME: &str = "Pacific Rift US";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration, read once at startup and handed to the bot, the
/// scheduler and the stats client.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,
    pub status_channel_id: u64,

    pub stats_api_url: String,
    pub stats_application_id: u64,
    pub http_timeout: Duration,

    pub message_id_file: PathBuf,
    pub poll_interval: Duration,
    pub command_prefix: String,
    pub catch_all_lobby_name: String,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` if unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - Missing or invalid variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let status_channel_id = parse_id("STATUS_CHANNEL_ID", &required("STATUS_CHANNEL_ID")?)?;
        if status_channel_id == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "STATUS_CHANNEL_ID".to_string(),
                value: "0".to_string(),
                reason: "must be a Discord channel id".to_string(),
            }
            .into());
        }

        let stats_application_id = match lookup("STATS_APPLICATION_ID") {
            Some(value) => parse_id("STATS_APPLICATION_ID", &value)?,
            None => DEFAULT_STATS_APPLICATION_ID,
        };

        let poll_interval = parse_seconds(
            "POLL_INTERVAL_SECS",
            lookup("POLL_INTERVAL_SECS"),
            DEFAULT_POLL_INTERVAL_SECS,
        )?;
        let http_timeout = parse_seconds(
            "HTTP_TIMEOUT_SECS",
            lookup("HTTP_TIMEOUT_SECS"),
            DEFAULT_HTTP_TIMEOUT_SECS,
        )?;

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            status_channel_id,
            stats_api_url: lookup("STATS_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_STATS_API_URL.to_string()),
            stats_application_id,
            http_timeout,
            message_id_file: lookup("MESSAGE_ID_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MESSAGE_ID_FILE)),
            poll_interval,
            command_prefix: lookup("COMMAND_PREFIX")
                .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string()),
            catch_all_lobby_name: lookup("CATCH_ALL_LOBBY_NAME")
                .unwrap_or_else(|| DEFAULT_CATCH_ALL_LOBBY_NAME.to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    parse_u64_from_string(value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn parse_seconds(name: &str, value: Option<String>, default: u64) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(default));
    };

    let seconds = parse_id(name, &value)?;
    if seconds == 0 {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Duration::from_secs(seconds))
}
