use chrono::NaiveDate;
use serde_derive::Serialize;

use super::traits::UpsertRow;

/// One monthly utility bill, amounts in euros.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtilityBillRow {
    /// First day of the billed month
    #[serde(rename = "mois")]
    pub month: NaiveDate,
    #[serde(rename = "montant_consommation")]
    pub consumption_amount: f64,
    #[serde(rename = "montant_abonnement")]
    pub subscription_amount: f64,
    #[serde(rename = "consommation_kwh", skip_serializing_if = "Option::is_none")]
    pub consumption_kwh: Option<f64>,
}

impl UtilityBillRow {
    pub fn new(month: NaiveDate, consumption_amount: f64, subscription_amount: f64) -> Self {
        Self {
            month,
            consumption_amount,
            subscription_amount,
            consumption_kwh: None,
        }
    }

    pub fn total(&self) -> f64 {
        self.consumption_amount + self.subscription_amount
    }
}

impl UpsertRow for UtilityBillRow {
    fn label(&self) -> String {
        self.month.format("%Y-%m").to_string()
    }

    fn details(&self) -> String {
        format!(
            "{} : {:>7.2}€ (conso: {:>6.2}€ + abo: {:>5.2}€)",
            self.label(),
            self.total(),
            self.consumption_amount,
            self.subscription_amount
        )
    }
}
