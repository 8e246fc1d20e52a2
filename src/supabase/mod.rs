//! Hosted REST backend (Supabase / PostgREST).
//!
//! Rows are written one at a time with `Prefer: resolution=merge-duplicates`, so
//! re-sending a row that already exists is a no-op on the backend side.

mod client;
mod reporter;

pub use client::Client;
pub use reporter::{upsert_all, UpsertOutcome, UpsertSummary};
