//! Provider response and CSV fixtures.

use serde_json::json;

/// Header line of the utility-bill export.
pub const BILL_CSV_HEADER: &str = "Mois;Electricité;Electricité_abonnement;Gaz;Gaz_abonnement";

/// Builds an Open-Meteo daily response body with the same values for every date.
pub fn daily_response_json(dates: &[&str]) -> String {
    let n = dates.len();
    json!({
        "latitude": 48.86,
        "longitude": 2.35,
        "timezone": "Europe/Paris",
        "daily_units": { "time": "iso8601" },
        "daily": {
            "time": dates,
            "temperature_2m_max": vec![12.5; n],
            "temperature_2m_min": vec![4.5; n],
            "temperature_2m_mean": vec![8.0; n],
            "precipitation_sum": vec![1.2; n],
            "wind_speed_10m_max": vec![20.0; n],
            "relative_humidity_2m_mean": vec![80.0; n],
            "pressure_msl_mean": vec![1015.0; n],
            "cloud_cover_mean": vec![60.0; n]
        }
    })
    .to_string()
}

/// Builds a bill CSV from data lines, with a byte-order mark when asked.
pub fn bill_csv(lines: &[&str], with_bom: bool) -> String {
    let mut csv = String::new();
    if with_bom {
        csv.push('\u{feff}');
    }
    csv.push_str(BILL_CSV_HEADER);
    for line in lines {
        csv.push('\n');
        csv.push_str(line);
    }
    csv.push('\n');
    csv
}
