use crate::model::WeatherObservation;
use chrono::NaiveDate;
use serde_derive::Deserialize;

/// Daily metrics requested from Open-Meteo, in the order they are sent.
pub const DAILY_METRICS: [&str; 8] = [
    "temperature_2m_max",
    "temperature_2m_min",
    "temperature_2m_mean",
    "precipitation_sum",
    "wind_speed_10m_max",
    "relative_humidity_2m_mean",
    "pressure_msl_mean",
    "cloud_cover_mean",
];

/// Body of an Open-Meteo daily request.
#[derive(Deserialize, Debug)]
pub struct DailyResponse {
    pub daily: DailySeries,
}

/// Parallel arrays keyed by metric name, one entry per date in `time`.
///
/// A metric array that is missing or shorter than `time` reads as `None`.
#[derive(Deserialize, Debug, Default)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_2m_mean: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_sum: Vec<Option<f64>>,
    #[serde(default)]
    pub wind_speed_10m_max: Vec<Option<f64>>,
    #[serde(default)]
    pub relative_humidity_2m_mean: Vec<Option<f64>>,
    #[serde(default)]
    pub pressure_msl_mean: Vec<Option<f64>>,
    #[serde(default)]
    pub cloud_cover_mean: Vec<Option<f64>>,
}

fn value_at(values: &[Option<f64>], index: usize) -> Option<f64> {
    values.get(index).copied().flatten()
}

impl DailyResponse {
    /// Transposes the parallel arrays into one observation per day.
    pub fn into_observations(self, location_name: &str) -> Vec<WeatherObservation> {
        let daily = self.daily;
        daily
            .time
            .iter()
            .enumerate()
            .map(|(i, date)| WeatherObservation {
                date: *date,
                temperature_min: value_at(&daily.temperature_2m_min, i),
                temperature_max: value_at(&daily.temperature_2m_max, i),
                temperature_mean: value_at(&daily.temperature_2m_mean, i),
                humidity_mean: value_at(&daily.relative_humidity_2m_mean, i),
                precipitation_sum: value_at(&daily.precipitation_sum, i),
                wind_speed_max: value_at(&daily.wind_speed_10m_max, i),
                pressure_mean: value_at(&daily.pressure_msl_mean, i),
                cloud_cover_mean: value_at(&daily.cloud_cover_mean, i),
                location_name: location_name.to_string(),
            })
            .collect()
    }
}
