use std::fmt;

/// Backend table a row is written to.
///
/// Each table has its own natural key: `(date_mesure, ville)` for weather,
/// `mois` for the two bill tables.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Table {
    /// Daily weather observations
    Weather,
    /// Monthly electricity bills
    Electricity,
    /// Monthly gas bills
    Gas,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Table::Weather => write!(f, "meteo_data"),
            Table::Electricity => write!(f, "factures_electricite"),
            Table::Gas => write!(f, "factures_gaz"),
        }
    }
}

/// Utility a bill row belongs to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Utility {
    Electricity,
    Gas,
}

impl Utility {
    pub fn table(&self) -> Table {
        match self {
            Utility::Electricity => Table::Electricity,
            Utility::Gas => Table::Gas,
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Utility::Electricity => write!(f, "electricity"),
            Utility::Gas => write!(f, "gas"),
        }
    }
}
