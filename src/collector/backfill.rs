use crate::config::CollectorConfig;
use crate::meteo::WeatherSource;
use crate::model::Table;
use crate::supabase::{self, upsert_all, UpsertSummary};
use chrono::{Days, Duration, NaiveDate};
use std::fmt;
use tokio::time::sleep;

/// Inclusive date range fetched with a single provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Window {
    /// Number of days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} to {}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// Splits `[start, end]` into consecutive windows of at most `max_days` days.
///
/// Windows are in chronological order, contiguous and non-overlapping, and
/// together cover exactly `[start, end]`; only the last one may be shorter.
/// Returns no window when `start > end`. A `max_days` of 0 is treated as 1.
pub fn partition(start: NaiveDate, end: NaiveDate, max_days: u32) -> Vec<Window> {
    let span = Duration::days(i64::from(max_days.max(1)) - 1);
    let mut windows = Vec::new();
    let mut current = start;

    while current <= end {
        let window_end = current
            .checked_add_signed(span)
            .map_or(end, |candidate| candidate.min(end));
        windows.push(Window {
            start: current,
            end: window_end,
        });
        match window_end.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }

    windows
}

/// Outcome of a backfill run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BackfillReport {
    pub windows: usize,
    pub failed_windows: usize,
    pub upserts: UpsertSummary,
}

/// Historical population of the weather table.
pub struct Backfill<'a> {
    source: &'a dyn WeatherSource,
    backend: &'a supabase::Client,
    config: &'a CollectorConfig,
    // longest range the recent endpoint serves in one request
    max_past_days: u32,
}

impl<'a> Backfill<'a> {
    pub fn new(
        source: &'a dyn WeatherSource,
        backend: &'a supabase::Client,
        config: &'a CollectorConfig,
        max_past_days: u32,
    ) -> Self {
        Self {
            source,
            backend,
            config,
            max_past_days,
        }
    }

    /// Backfills from `since` up to yesterday, through the archive endpoint.
    pub async fn since(&self, since: NaiveDate, today: NaiveDate) -> BackfillReport {
        let end = today - Duration::days(1);
        tracing::info!("Collecting history from {} to {}", since, end);
        self.range(since, end).await
    }

    /// Backfills the last `days` days before today.
    ///
    /// Short ranges are served by the recent endpoint in a single request; longer
    /// ones fall back to windowed archive requests.
    pub async fn last_days(&self, days: u32, today: NaiveDate) -> BackfillReport {
        if days == 0 {
            return BackfillReport::default();
        }
        let (Some(start), Some(end)) = (
            today.checked_sub_days(Days::new(days.into())),
            today.pred_opt(),
        ) else {
            tracing::error!(
                "Cannot collect {} days before {}: out of the date range",
                days,
                today
            );
            return BackfillReport::default();
        };
        tracing::info!("Collecting the last {} days ({} to {})", days, start, end);

        if days > self.max_past_days {
            return self.range(start, end).await;
        }

        let mut report = BackfillReport {
            windows: 1,
            ..BackfillReport::default()
        };
        match self.source.fetch_recent(start, end, days).await {
            Ok(observations) => {
                report.upserts = upsert_all(self.backend, Table::Weather, &observations).await
            }
            Err(e) => {
                tracing::error!("Failed to fetch the last {} days: {}", days, e);
                report.failed_windows = 1;
            }
        }
        log_report(&report);
        report
    }

    /// Fetches and writes `[start, end]` window by window, pausing between windows.
    ///
    /// A window whose fetch fails is logged and skipped.
    pub async fn range(&self, start: NaiveDate, end: NaiveDate) -> BackfillReport {
        let windows = partition(start, end, self.config.window_days);
        let mut report = BackfillReport {
            windows: windows.len(),
            ..BackfillReport::default()
        };

        for (i, window) in windows.iter().enumerate() {
            if i > 0 {
                sleep(self.config.window_pause()).await;
            }
            tracing::info!(
                "Window {}/{}: {} ({} days)",
                i + 1,
                windows.len(),
                window,
                window.days()
            );

            match self.source.fetch_archive(window.start, window.end).await {
                Ok(observations) => {
                    let summary = upsert_all(self.backend, Table::Weather, &observations).await;
                    report.upserts.merge(summary);
                }
                Err(e) => {
                    tracing::warn!("Skipping window {}: {}", window, e);
                    report.failed_windows += 1;
                }
            }
        }

        log_report(&report);
        report
    }
}

fn log_report(report: &BackfillReport) {
    tracing::info!(
        "Backfill finished: {} windows ({} failed), {}",
        report.windows,
        report.failed_windows,
        report.upserts
    );
}
