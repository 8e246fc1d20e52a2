//! Rows written to the REST backend.
//!
//! This module provides the domain rows (weather observations and utility bills),
//! the backend tables they belong to, and the trait the upsert reporter relies on
//! to serialize and describe them.

pub mod bill;
pub mod traits;
pub mod types;
pub mod weather;

// Re-export commonly used items at the module level
pub use bill::UtilityBillRow;
pub use traits::UpsertRow;
pub use types::{Table, Utility};
pub use weather::WeatherObservation;
