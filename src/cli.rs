use chrono::NaiveDate;
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "meteo-bills-forwarder",
    version,
    about = "Forwards daily weather observations and utility bills to a REST backend"
)]
pub struct Cli {
    /// Defaults to `daily` when absent.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect yesterday's weather once.
    Daily,

    /// Collect yesterday's weather every day at COLLECTOR_DAILY_AT until stopped.
    Schedule,

    /// Populate the weather table with past observations.
    Backfill(BackfillArgs),

    /// Import electricity and gas bills from a semicolon-delimited CSV export.
    ImportBills {
        /// Path to the CSV file; asked interactively when absent.
        path: Option<PathBuf>,

        /// Import without asking for confirmation.
        #[arg(long, short)]
        yes: bool,
    },

    /// Check that the backend is reachable with the configured credentials.
    Check,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("range").required(true).args(["since", "days"])))]
pub struct BackfillArgs {
    /// First day to collect, e.g. 2023-04-01. Collection ends yesterday.
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Number of days before today to collect.
    #[arg(long)]
    pub days: Option<u32>,
}

/// Date range a backfill covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackfillRange {
    /// From a day up to yesterday.
    Since(NaiveDate),
    /// The given number of days before today.
    LastDays(u32),
}

impl BackfillArgs {
    /// `--since` wins; the `range` group makes sure one of the flags is set.
    pub fn range(&self) -> BackfillRange {
        match self.since {
            Some(since) => BackfillRange::Since(since),
            None => BackfillRange::LastDays(self.days.unwrap_or_default()),
        }
    }
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Daily)
    }
}
