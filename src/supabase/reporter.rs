use crate::error::BackendError;
use crate::model::{Table, UpsertRow};
use crate::supabase::Client;
use reqwest::StatusCode;
use std::fmt;

// enough of a rejection body to diagnose it in the logs
const MAX_DIAGNOSTIC_CHARS: usize = 100;

/// Result of writing a single row.
#[derive(Debug)]
pub enum UpsertOutcome {
    /// Row was written (200/201)
    Created,
    /// Row already existed (409); not an error
    Duplicate,
    /// Any other status, or a transport failure
    Rejected(BackendError),
}

impl UpsertOutcome {
    /// Classifies a backend response.
    pub fn from_response(status: StatusCode, body: String) -> Self {
        match status.as_u16() {
            200 | 201 => Self::Created,
            409 => Self::Duplicate,
            _ => Self::Rejected(BackendError::rejected(
                status,
                body.chars().take(MAX_DIAGNOSTIC_CHARS).collect(),
            )),
        }
    }
}

/// Per-outcome counts of a batch of upserts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UpsertSummary {
    pub created: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

impl UpsertSummary {
    pub fn record(&mut self, outcome: &UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created => self.created += 1,
            UpsertOutcome::Duplicate => self.duplicates += 1,
            UpsertOutcome::Rejected(_) => self.rejected += 1,
        }
    }

    pub fn merge(&mut self, other: UpsertSummary) {
        self.created += other.created;
        self.duplicates += other.duplicates;
        self.rejected += other.rejected;
    }

    pub fn total(&self) -> usize {
        self.created + self.duplicates + self.rejected
    }

    /// True when no row was rejected.
    pub fn is_clean(&self) -> bool {
        self.rejected == 0
    }
}

impl fmt::Display for UpsertSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} created, {} duplicates, {} rejected",
            self.created, self.duplicates, self.rejected
        )
    }
}

/// Writes each row individually and counts the outcomes.
///
/// A duplicate or rejected row never stops the batch; every outcome is logged as
/// it happens and the summary is logged at the end.
pub async fn upsert_all<R: UpsertRow>(client: &Client, table: Table, rows: &[R]) -> UpsertSummary {
    let mut summary = UpsertSummary::default();

    if rows.is_empty() {
        tracing::warn!("No rows to write to {}", table);
        return summary;
    }

    for row in rows {
        let outcome = client.insert(table, row).await;
        match &outcome {
            UpsertOutcome::Created => tracing::info!("{} {}: created", table, row.details()),
            UpsertOutcome::Duplicate => {
                tracing::info!("{} {}: already exists, ignored", table, row.label())
            }
            UpsertOutcome::Rejected(e) => tracing::error!("{} {}: {}", table, row.label(), e),
        }
        summary.record(&outcome);
    }

    tracing::info!(
        table = %table,
        "Upsert finished for {} rows: {}",
        summary.total(),
        summary
    );
    summary
}
