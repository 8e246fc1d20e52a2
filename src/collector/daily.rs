use crate::error::WeatherError;
use crate::meteo::WeatherSource;
use crate::model::Table;
use crate::supabase::{self, upsert_all, UpsertSummary};
use chrono::{Duration, NaiveDate};

/// Fetches yesterday's observation and writes it.
///
/// Holds no state between calls, so the caller decides when and how often it
/// runs. Running it twice for the same day only produces a duplicate.
pub async fn collect_daily(
    source: &dyn WeatherSource,
    backend: &supabase::Client,
    today: NaiveDate,
) -> Result<UpsertSummary, WeatherError> {
    let yesterday = today - Duration::days(1);
    tracing::info!("Collecting weather for {}", yesterday);

    let observations = source.fetch_archive(yesterday, yesterday).await?;
    let summary = upsert_all(backend, Table::Weather, &observations).await;

    if summary.is_clean() {
        tracing::info!("Daily collection succeeded");
    } else {
        tracing::warn!("Daily collection finished with errors");
    }
    Ok(summary)
}
