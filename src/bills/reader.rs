use crate::bills::amount::normalize_amount;
use crate::error::ImportError;
use crate::model::{Utility, UtilityBillRow};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use serde_derive::Deserialize;
use std::io::{ErrorKind, Read};
use std::path::Path;

const MONTH_COLUMN: &str = "Mois";

/// One line of the bill export, as text.
#[derive(Deserialize, Debug)]
struct BillRecord {
    #[serde(rename = "Mois")]
    month: String,
    #[serde(rename = "Electricité", default)]
    electricity: Option<String>,
    #[serde(rename = "Electricité_abonnement", default)]
    electricity_subscription: Option<String>,
    #[serde(rename = "Gaz", default)]
    gas: Option<String>,
    #[serde(rename = "Gaz_abonnement", default)]
    gas_subscription: Option<String>,
}

/// Electricity and gas rows read from one export.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BillSets {
    pub electricity: Vec<UtilityBillRow>,
    pub gas: Vec<UtilityBillRow>,
}

impl BillSets {
    pub fn rows(&self, utility: Utility) -> &[UtilityBillRow] {
        match utility {
            Utility::Electricity => &self.electricity,
            Utility::Gas => &self.gas,
        }
    }
}

fn bill_row(
    month: NaiveDate,
    consumption: Option<&str>,
    subscription: Option<&str>,
) -> Option<UtilityBillRow> {
    let consumption = normalize_amount(consumption)?;
    let subscription = normalize_amount(subscription)?;
    Some(UtilityBillRow::new(month, consumption, subscription))
}

/// Parses a `;`-delimited bill export.
///
/// A row only enters a set when both of its amounts parse; lines with an
/// unreadable month are skipped. Fails only when the content itself is not a
/// readable CSV with a `Mois` column.
pub fn parse_bills<R: Read>(reader: R) -> Result<BillSets, ImportError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(ImportError::parse)?;
    if !headers.iter().any(|h| h == MONTH_COLUMN) {
        return Err(ImportError::parse(format!("missing column {}", MONTH_COLUMN)));
    }

    let mut sets = BillSets::default();
    for result in reader.deserialize::<BillRecord>() {
        let record = result.map_err(ImportError::parse)?;

        let month = match NaiveDate::parse_from_str(record.month.trim(), "%Y-%m-%d") {
            Ok(month) => month,
            Err(e) => {
                tracing::warn!("Skipping line with month '{}': {}", record.month, e);
                continue;
            }
        };

        if let Some(row) = bill_row(
            month,
            record.electricity.as_deref(),
            record.electricity_subscription.as_deref(),
        ) {
            sets.electricity.push(row);
        }
        if let Some(row) = bill_row(
            month,
            record.gas.as_deref(),
            record.gas_subscription.as_deref(),
        ) {
            sets.gas.push(row);
        }
    }

    tracing::info!(
        "CSV read: {} electricity rows, {} gas rows",
        sets.electricity.len(),
        sets.gas.len()
    );
    Ok(sets)
}

/// Reads a bill export from disk. A leading byte-order mark is ignored.
pub fn read_bills(path: &Path) -> Result<BillSets, ImportError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ImportError::not_found(&display),
        ErrorKind::InvalidData => ImportError::parse(format!("{} is not valid UTF-8", display)),
        _ => ImportError::io(&display, e),
    })?;

    parse_bills(content.trim_start_matches('\u{feff}').as_bytes())
}
