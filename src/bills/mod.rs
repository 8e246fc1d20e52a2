//! Utility-bill CSV import.
//!
//! An amount that does not parse is treated as absent and drops its row instead
//! of failing the whole file.

mod amount;
mod preview;
mod reader;

pub use preview::BillTotals;
pub use reader::{read_bills, BillSets};
