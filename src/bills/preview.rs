use crate::model::UtilityBillRow;
use chrono::NaiveDate;

/// Aggregate amounts of a bill set, shown before importing it.
#[derive(Debug, Clone, PartialEq)]
pub struct BillTotals {
    pub count: usize,
    pub first_month: NaiveDate,
    pub last_month: NaiveDate,
    pub consumption: f64,
    pub subscription: f64,
}

impl BillTotals {
    /// Sums a set of rows; `None` when there is nothing to sum.
    ///
    /// The period follows file order: first and last row.
    pub fn from_rows(rows: &[UtilityBillRow]) -> Option<Self> {
        let first = rows.first()?;
        let last = rows.last()?;

        Some(Self {
            count: rows.len(),
            first_month: first.month,
            last_month: last.month,
            consumption: rows.iter().map(|r| r.consumption_amount).sum(),
            subscription: rows.iter().map(|r| r.subscription_amount).sum(),
        })
    }

    pub fn total(&self) -> f64 {
        self.consumption + self.subscription
    }

    pub fn period(&self) -> String {
        format!(
            "{} → {}",
            self.first_month.format("%Y-%m"),
            self.last_month.format("%Y-%m")
        )
    }
}
