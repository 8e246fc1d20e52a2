//! Open-Meteo weather provider.
//!
//! The archive endpoint serves any past date range; the forecast endpoint serves
//! a short lookback (`past_days`) and is used for recent windows.

mod client;
pub mod response;

pub use client::Client;

use crate::error::WeatherError;
use crate::model::WeatherObservation;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Source of daily weather observations for the configured location.
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetches observations for `[start, end]` from the historical archive.
    async fn fetch_archive(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WeatherObservation>, WeatherError>;

    /// Fetches observations for `[start, end]` using a `past_days` lookback from today.
    async fn fetch_recent(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        past_days: u32,
    ) -> Result<Vec<WeatherObservation>, WeatherError>;
}
