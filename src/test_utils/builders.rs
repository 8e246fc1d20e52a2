//! Test data builders for rows.

use crate::model::{UtilityBillRow, WeatherObservation};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` test date.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Creates a weather observation for Paris with fixed metric values.
pub fn observation(day: &str) -> WeatherObservation {
    observation_at(date(day), "Paris")
}

/// Creates a weather observation for the given date and location.
pub fn observation_at(day: NaiveDate, location_name: &str) -> WeatherObservation {
    WeatherObservation {
        date: day,
        temperature_min: Some(4.5),
        temperature_max: Some(12.5),
        temperature_mean: Some(8.0),
        humidity_mean: Some(80.0),
        precipitation_sum: Some(1.2),
        wind_speed_max: Some(20.0),
        pressure_mean: Some(1015.0),
        cloud_cover_mean: Some(60.0),
        location_name: location_name.to_string(),
    }
}

/// Creates a bill row without kWh consumption.
pub fn bill_row(month: &str, consumption: f64, subscription: f64) -> UtilityBillRow {
    UtilityBillRow::new(date(month), consumption, subscription)
}
