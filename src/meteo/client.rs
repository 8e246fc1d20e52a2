use crate::config::{LocationConfig, OpenMeteoConfig};
use crate::error::WeatherError;
use crate::meteo::response::{DailyResponse, DAILY_METRICS};
use crate::meteo::WeatherSource;
use crate::model::WeatherObservation;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client as HttpClient;

pub struct Client {
    http_client: HttpClient,
    config: OpenMeteoConfig,
    location: LocationConfig,
}

impl Client {
    pub fn new(config: OpenMeteoConfig, location: LocationConfig) -> Result<Self, WeatherError> {
        let http_client = HttpClient::builder().timeout(config.timeout()).build()?;
        Ok(Self {
            http_client,
            config,
            location,
        })
    }

    fn base_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", self.location.latitude.to_string()),
            ("longitude", self.location.longitude.to_string()),
            ("daily", DAILY_METRICS.join(",")),
            ("timezone", self.location.timezone.clone()),
        ]
    }

    async fn get_daily(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<DailyResponse, WeatherError> {
        tracing::debug!("GET {} {:?}", url, params);
        let response = self
            .http_client
            .get(url)
            .query(params)
            .header("user-agent", "reqwest")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(WeatherError::server_error(status, body));
        }

        serde_json::from_str(&body).map_err(|e| WeatherError::Decode(e.to_string()))
    }
}

#[async_trait]
impl WeatherSource for Client {
    async fn fetch_archive(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<WeatherObservation>, WeatherError> {
        let mut params = self.base_params();
        params.push(("start_date", start.format("%Y-%m-%d").to_string()));
        params.push(("end_date", end.format("%Y-%m-%d").to_string()));

        let response = self.get_daily(&self.config.archive_url, &params).await?;
        Ok(response.into_observations(&self.location.name))
    }

    async fn fetch_recent(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        past_days: u32,
    ) -> Result<Vec<WeatherObservation>, WeatherError> {
        let mut params = self.base_params();
        params.push(("past_days", past_days.to_string()));
        params.push(("forecast_days", "1".to_string()));

        let response = self.get_daily(&self.config.forecast_url, &params).await?;
        Ok(response
            .into_observations(&self.location.name)
            .into_iter()
            .filter(|o| o.date >= start && o.date <= end)
            .collect())
    }
}
