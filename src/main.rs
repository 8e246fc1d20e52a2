//! Weather and utility-bill forwarder
//!
//! This application collects daily weather observations from Open-Meteo for a fixed
//! location and utility bills from a CSV export, and writes both to a hosted REST
//! backend (Supabase).
//!
//! # Commands
//!
//! - **daily** (default): collect yesterday's observation once
//! - **schedule**: run the daily collection every day at a fixed time
//! - **backfill**: populate past observations, window by window
//! - **import-bills**: preview, confirm and import an electricity/gas CSV export
//! - **check**: probe the backend
//!
//! Every write is an idempotent upsert, so any command can safely be re-run.

mod bills;
mod cli;
mod collector;
mod config;
mod error;
mod meteo;
mod model;
mod scheduler;
mod supabase;

#[cfg(test)]
mod test_utils;

use crate::bills::{BillSets, BillTotals};
use crate::cli::{BackfillArgs, BackfillRange, Cli, Command};
use crate::collector::{collect_daily, Backfill};
use crate::config::CollectorConfig;
use crate::model::Utility;
use crate::supabase::{upsert_all, UpsertSummary};
use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};

/// Clients and settings shared by the weather commands.
struct WeatherContext {
    source: meteo::Client,
    backend: supabase::Client,
    collector: CollectorConfig,
    max_past_days: u32,
    timezone: Tz,
}

impl WeatherContext {
    /// Loads every configuration the weather commands need, failing on the first
    /// missing value.
    fn load() -> error::Result<Self> {
        let supabase_config = config::load_supabase_config()?;
        let location_config = config::load_location_config()?;
        let open_meteo_config = config::load_open_meteo_config()?;
        let collector = config::load_collector_config()?;
        let timezone = location_config.tz()?;

        let max_past_days = open_meteo_config.max_past_days;
        Ok(Self {
            source: meteo::Client::new(open_meteo_config, location_config)?,
            backend: supabase::Client::new(supabase_config)?,
            collector,
            max_past_days,
            timezone,
        })
    }
}

/// Application entry point.
///
/// Loads `.env`, initializes logging and dispatches the subcommand. Any error
/// returned here ends the process with a non-zero exit code.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let app_config = config::load_app_config()?;
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    match cli.command() {
        Command::Daily => {
            let ctx = WeatherContext::load()?;
            check_backend(&ctx.backend).await?;
            run_daily(&ctx, today(ctx.timezone)).await
        }
        Command::Schedule => {
            let ctx = WeatherContext::load()?;
            run_schedule(&ctx).await
        }
        Command::Backfill(args) => {
            let ctx = WeatherContext::load()?;
            check_backend(&ctx.backend).await?;
            run_backfill(&ctx, args, today(ctx.timezone)).await;
            Ok(())
        }
        Command::ImportBills { path, yes } => {
            let backend = supabase::Client::new(config::load_supabase_config()?)?;
            run_import(&backend, path, yes).await
        }
        Command::Check => {
            let backend = supabase::Client::new(config::load_supabase_config()?)?;
            check_backend(&backend).await
        }
    }
}

/// Current day at the weather location, whatever the host's own zone.
fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

/// Probes the backend before doing any work.
async fn check_backend(backend: &supabase::Client) -> Result<()> {
    backend
        .probe()
        .await
        .context("Backend is unreachable, check SUPABASE_URL and SUPABASE_KEY")?;
    tracing::info!("Backend connection OK");
    Ok(())
}

/// Collects yesterday's observation once.
async fn run_daily(ctx: &WeatherContext, today: NaiveDate) -> Result<()> {
    let summary = collect_daily(&ctx.source, &ctx.backend, today)
        .await
        .map_err(|e| anyhow!("Daily collection failed: {}", e))?;
    tracing::info!("Daily collection: {}", summary);
    Ok(())
}

/// Runs the daily collection at the configured time until SIGTERM or Ctrl-C.
///
/// A failed run is logged and the next one is scheduled as usual.
async fn run_schedule(ctx: &WeatherContext) -> Result<()> {
    let at = ctx.collector.daily_at()?;
    let mut sig_term =
        signal(SignalKind::terminate()).context("Failed to register SIGTERM handler")?;

    let shutdown = async move {
        tokio::select! {
            // Handle SIGTERM for graceful shutdown in containers
            _ = sig_term.recv() => tracing::info!("Received SIGTERM. Exiting..."),
            // Handle Ctrl-C for manual termination
            _ = ctrl_c() => tracing::info!("Received SIGINT. Exiting..."),
        }
    };

    tracing::info!(
        "Collection scheduled every day at {}. Press Ctrl-C or send SIGTERM to terminate.",
        at.format("%H:%M")
    );
    scheduler::run_daily_at(at, ctx.timezone, shutdown, move || async move {
        if let Err(e) = run_daily(ctx, today(ctx.timezone)).await {
            tracing::error!("{:#}", e);
        }
    })
    .await;
    Ok(())
}

/// Backfills either from a start date or over the last N days.
async fn run_backfill(ctx: &WeatherContext, args: BackfillArgs, today: NaiveDate) {
    let backfill = Backfill::new(&ctx.source, &ctx.backend, &ctx.collector, ctx.max_past_days);

    let report = match args.range() {
        BackfillRange::Since(since) => backfill.since(since, today).await,
        BackfillRange::LastDays(days) => backfill.last_days(days, today).await,
    };

    if report.failed_windows == 0 && report.upserts.is_clean() {
        tracing::info!("History collected successfully");
    } else {
        tracing::warn!("History collected with errors");
    }
}

/// Reads, previews and, once confirmed, imports a bill export.
///
/// A missing or unreadable file ends the import before anything is sent.
async fn run_import(backend: &supabase::Client, path: Option<PathBuf>, yes: bool) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => prompt_path()?,
    };

    let sets = bills::read_bills(&path)?;
    if sets.electricity.is_empty() && sets.gas.is_empty() {
        tracing::warn!("No bill rows found in {}", path.display());
        return Ok(());
    }

    print_preview(&sets);

    if !yes && !confirm_import()? {
        println!("\nImport cancelled\n");
        return Ok(());
    }

    for (utility, summary) in upload_bills(backend, &sets).await {
        tracing::info!("{} import: {}", utility, summary);
    }
    Ok(())
}

/// Writes each bill set to its table.
async fn upload_bills(
    backend: &supabase::Client,
    sets: &BillSets,
) -> Vec<(Utility, UpsertSummary)> {
    let mut summaries = Vec::new();
    for utility in [Utility::Electricity, Utility::Gas] {
        let rows = sets.rows(utility);
        tracing::info!("Importing {} {} bills", rows.len(), utility);
        summaries.push((utility, upsert_all(backend, utility.table(), rows).await));
    }
    summaries
}

fn print_preview(sets: &BillSets) {
    println!("{}", "=".repeat(70));
    for (utility, title) in [(Utility::Electricity, "ELECTRICITY"), (Utility::Gas, "GAS")] {
        if let Some(totals) = BillTotals::from_rows(sets.rows(utility)) {
            println!("\n{} : {} bills", title, totals.count);
            println!("   Period             : {}", totals.period());
            println!("   Total consumption  : {:>8.2}€", totals.consumption);
            println!("   Total subscription : {:>8.2}€", totals.subscription);
            println!("   TOTAL              : {:>8.2}€", totals.total());
        }
    }
    println!("\n{}", "=".repeat(70));
}

fn prompt_path() -> Result<PathBuf> {
    let answer = inquire::Text::new("Drop the CSV file here, then press Enter:").prompt()?;
    Ok(clean_dropped_path(&answer))
}

fn confirm_import() -> Result<bool> {
    let answer = inquire::Text::new("Import these rows into the backend? (o/n)").prompt()?;
    Ok(is_affirmative(&answer))
}

/// Terminals wrap dropped paths containing spaces in quotes.
fn clean_dropped_path(answer: &str) -> PathBuf {
    PathBuf::from(answer.trim().trim_matches('"'))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "o" | "oui" | "y" | "yes"
    )
}
