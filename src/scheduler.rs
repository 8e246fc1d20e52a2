//! Wall-clock trigger for the daily collection.
//!
//! The trigger time is read in the location's time zone, not the host's, so a
//! UTC host still collects at the configured local hour and DST changes move
//! the instant of the run instead of its wall-clock time. The job itself is an
//! opaque callback; this module only decides when it runs.

use chrono::{DateTime, Duration as ChronoDuration, NaiveDateTime, NaiveTime, TimeZone, Utc};
use std::future::Future;
use tokio::time::{sleep, Duration};

/// Next occurrence of wall-clock `at` strictly after `now`, in `now`'s zone.
///
/// A time skipped by a DST jump runs one hour later on that day.
pub fn next_run_after<Z: TimeZone>(now: &DateTime<Z>, at: NaiveTime) -> DateTime<Z> {
    let tz = now.timezone();
    let mut day = now.date_naive();
    loop {
        if let Some(candidate) = resolve_local(&tz, day.and_time(at)) {
            if candidate > *now {
                return candidate;
            }
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => return now.clone(),
        };
    }
}

fn resolve_local<Z: TimeZone>(tz: &Z, local: NaiveDateTime) -> Option<DateTime<Z>> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(local + ChronoDuration::hours(1))).earliest())
}

/// Time left until `next`, zero if it is already past.
pub fn delay_until<Z: TimeZone>(now: &DateTime<Z>, next: &DateTime<Z>) -> Duration {
    (next.naive_utc() - now.naive_utc())
        .to_std()
        .unwrap_or(Duration::ZERO)
}

/// Runs `job` every day at `at` in zone `tz` until `shutdown` completes.
///
/// A run in progress is not interrupted; overlapping runs cannot happen since
/// the next trigger is only computed once the job returns.
pub async fn run_daily_at<Z, S, F, Fut>(at: NaiveTime, tz: Z, shutdown: S, mut job: F)
where
    Z: TimeZone,
    S: Future,
    F: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    tokio::pin!(shutdown);

    loop {
        let now = Utc::now().with_timezone(&tz);
        let next = next_run_after(&now, at);
        tracing::info!(
            "Next collection at {}",
            next.naive_local().format("%Y-%m-%d %H:%M")
        );

        tokio::select! {
            _ = &mut shutdown => break,
            _ = sleep(delay_until(&now, &next)) => job().await,
        }
    }
}
