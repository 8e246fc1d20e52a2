use crate::error::ConfigError;
use chrono::NaiveTime;
use chrono_tz::Tz;
use serde_derive::Deserialize;
use std::str::FromStr;
use std::time::Duration;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(|err| ConfigError::from_envy("", err))
}

fn default_backend_timeout_sec() -> u64 {
    10
}

/// Hosted REST backend (Supabase) credentials.
#[derive(Deserialize, Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub key: String,
    #[serde(default = "default_backend_timeout_sec")]
    pub timeout_sec: u64,
}

impl SupabaseConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}

pub fn load_supabase_config() -> Result<SupabaseConfig, ConfigError> {
    envy::prefixed("SUPABASE_")
        .from_env::<SupabaseConfig>()
        .map_err(|err| ConfigError::from_envy("SUPABASE_", err))
}

fn default_timezone() -> String {
    "Europe/Paris".to_string()
}

/// Fixed location the weather observations are collected for.
#[derive(Deserialize, Debug, Clone)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "ville")]
    pub name: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl LocationConfig {
    /// IANA zone the location's days are counted in.
    pub fn tz(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::invalid("TIMEZONE", e.to_string()))
    }
}

pub fn load_location_config() -> Result<LocationConfig, ConfigError> {
    let config =
        envy::from_env::<LocationConfig>().map_err(|err| ConfigError::from_envy("", err))?;
    config.tz()?;
    Ok(config)
}

fn default_archive_url() -> String {
    "https://archive-api.open-meteo.com/v1/archive".to_string()
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

fn default_weather_timeout_sec() -> u64 {
    30
}

fn default_max_past_days() -> u32 {
    92
}

#[derive(Deserialize, Debug, Clone)]
pub struct OpenMeteoConfig {
    #[serde(default = "default_archive_url")]
    pub archive_url: String,
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    #[serde(default = "default_weather_timeout_sec")]
    pub timeout_sec: u64,
    // longest lookback the recent endpoint accepts
    #[serde(default = "default_max_past_days")]
    pub max_past_days: u32,
}

impl OpenMeteoConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_sec)
    }
}

pub fn load_open_meteo_config() -> Result<OpenMeteoConfig, ConfigError> {
    envy::prefixed("OPEN_METEO_")
        .from_env::<OpenMeteoConfig>()
        .map_err(|err| ConfigError::from_envy("OPEN_METEO_", err))
}

fn default_daily_at() -> String {
    "07:00".to_string()
}

fn default_window_days() -> u32 {
    365
}

fn default_window_pause_ms() -> u64 {
    1000
}

#[derive(Deserialize, Debug, Clone)]
pub struct CollectorConfig {
    // wall-clock time of the scheduled daily collection, HH:MM local time
    #[serde(default = "default_daily_at")]
    pub daily_at: String,
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_window_pause_ms")]
    pub window_pause_ms: u64,
}

impl CollectorConfig {
    pub fn daily_at(&self) -> Result<NaiveTime, ConfigError> {
        NaiveTime::parse_from_str(self.daily_at.trim(), "%H:%M")
            .map_err(|e| ConfigError::invalid("COLLECTOR_DAILY_AT", e.to_string()))
    }

    pub fn window_pause(&self) -> Duration {
        Duration::from_millis(self.window_pause_ms)
    }
}

pub fn load_collector_config() -> Result<CollectorConfig, ConfigError> {
    let config = envy::prefixed("COLLECTOR_")
        .from_env::<CollectorConfig>()
        .map_err(|err| ConfigError::from_envy("COLLECTOR_", err))?;

    if config.window_days == 0 {
        return Err(ConfigError::invalid(
            "COLLECTOR_WINDOW_DAYS",
            "must be at least 1",
        ));
    }
    config.daily_at()?;

    Ok(config)
}
