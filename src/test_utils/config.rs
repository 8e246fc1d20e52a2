//! Configuration utilities for testing.
//!
//! This module provides test configuration builders for the backend, the weather
//! provider and the location, pointing at mock servers where needed.

use crate::config::{CollectorConfig, LocationConfig, OpenMeteoConfig, SupabaseConfig};

/// Builder for creating test backend configurations.
#[derive(Debug)]
pub struct TestSupabaseConfigBuilder {
    url: String,
    key: String,
    timeout_sec: u64,
}

impl TestSupabaseConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            url: "http://localhost:54321".to_string(),
            key: "test-key".to_string(),
            timeout_sec: 10,
        }
    }

    /// Sets the URL for the test configuration.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the API key for the test configuration.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Sets the request timeout for the test configuration.
    pub fn with_timeout_sec(mut self, timeout_sec: u64) -> Self {
        self.timeout_sec = timeout_sec;
        self
    }

    /// Builds the backend configuration.
    pub fn build(self) -> SupabaseConfig {
        SupabaseConfig {
            url: self.url,
            key: self.key,
            timeout_sec: self.timeout_sec,
        }
    }
}

/// Builder for creating test weather provider configurations.
#[derive(Debug)]
pub struct TestOpenMeteoConfigBuilder {
    base_url: String,
    timeout_sec: u64,
    max_past_days: u32,
}

impl TestOpenMeteoConfigBuilder {
    /// Creates a new test config builder with default values.
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_sec: 30,
            max_past_days: 92,
        }
    }

    /// Serves both provider endpoints from the given base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the recent-mode lookback limit.
    pub fn with_max_past_days(mut self, days: u32) -> Self {
        self.max_past_days = days;
        self
    }

    /// Builds the weather provider configuration.
    pub fn build(self) -> OpenMeteoConfig {
        OpenMeteoConfig {
            archive_url: format!("{}/v1/archive", self.base_url),
            forecast_url: format!("{}/v1/forecast", self.base_url),
            timeout_sec: self.timeout_sec,
            max_past_days: self.max_past_days,
        }
    }
}

/// Builder for creating test location configurations.
#[derive(Debug)]
pub struct TestLocationConfigBuilder {
    name: String,
}

impl TestLocationConfigBuilder {
    /// Creates a new test config builder located in Paris.
    pub fn new() -> Self {
        Self {
            name: "Paris".to_string(),
        }
    }

    /// Sets the location name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds the location configuration.
    pub fn build(self) -> LocationConfig {
        LocationConfig {
            latitude: 48.8566,
            longitude: 2.3522,
            name: self.name,
            timezone: "Europe/Paris".to_string(),
        }
    }
}

/// Creates a collector configuration with the given window size and no pause.
pub fn test_collector_config(window_days: u32) -> CollectorConfig {
    CollectorConfig {
        daily_at: "07:00".to_string(),
        window_days,
        window_pause_ms: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supabase_config_builder() {
        let config = TestSupabaseConfigBuilder::new()
            .with_url("http://supabase.local")
            .with_key("other-key")
            .with_timeout_sec(2)
            .build();

        assert_eq!(config.url, "http://supabase.local");
        assert_eq!(config.key, "other-key");
        assert_eq!(config.timeout_sec, 2);
    }

    #[test]
    fn test_open_meteo_config_builder() {
        let config = TestOpenMeteoConfigBuilder::new()
            .with_base_url("http://meteo.local")
            .with_max_past_days(10)
            .build();

        assert_eq!(config.archive_url, "http://meteo.local/v1/archive");
        assert_eq!(config.forecast_url, "http://meteo.local/v1/forecast");
        assert_eq!(config.max_past_days, 10);
    }

    #[test]
    fn test_location_config_builder() {
        let config = TestLocationConfigBuilder::new().with_name("Lyon").build();
        assert_eq!(config.name, "Lyon");
    }
}
