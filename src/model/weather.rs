use chrono::NaiveDate;
use serde_derive::Serialize;

use super::traits::UpsertRow;

/// One day of weather for the configured location.
///
/// Keyed by `(date, location_name)`. Metric values are `None` when the
/// provider has no data for the day and are written as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherObservation {
    #[serde(rename = "date_mesure")]
    pub date: NaiveDate,
    pub temperature_min: Option<f64>,
    pub temperature_max: Option<f64>,
    #[serde(rename = "temperature_moyenne")]
    pub temperature_mean: Option<f64>,
    #[serde(rename = "humidite")]
    pub humidity_mean: Option<f64>,
    #[serde(rename = "precipitation")]
    pub precipitation_sum: Option<f64>,
    #[serde(rename = "vitesse_vent")]
    pub wind_speed_max: Option<f64>,
    #[serde(rename = "pression")]
    pub pressure_mean: Option<f64>,
    #[serde(rename = "couverture_nuageuse")]
    pub cloud_cover_mean: Option<f64>,
    #[serde(rename = "ville")]
    pub location_name: String,
}

impl UpsertRow for WeatherObservation {
    fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
