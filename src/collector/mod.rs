//! Weather collection: the recurring daily run and the one-time backfill.

mod backfill;
mod daily;

pub use backfill::Backfill;
pub use daily::collect_daily;
