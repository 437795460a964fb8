mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use monthgrid_core::config::MonthGridConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "monthgrid")]
#[command(about = "Month-view calendar with per-day events and conflict detection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month as a six-week grid
    Month {
        /// Year to show (defaults to the current year)
        #[arg(short, long, allow_negative_numbers = true)]
        year: Option<i64>,

        /// Month to show, 1-12. Other values roll over into neighbouring years
        #[arg(short, long, allow_negative_numbers = true)]
        month: Option<i64>,

        /// Print the grid cells as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the events of one day
    Day {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Only show events whose title or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Create a new event
    Add(commands::add::AddArgs),
    /// Change an existing event
    Edit(commands::edit::EditArgs),
    /// Delete an event by id
    Delete {
        id: String,
    },
    /// Write a day's events to events-<DATE>.json
    Export {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Directory to write into (defaults to the current directory)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = MonthGridConfig::load()?;
    let store = config.event_store();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Month { year, month, json } => {
            commands::month::run(&store, year, month, json, today)
        }
        Commands::Day { date, search } => commands::day::run(&store, &date, search.as_deref()),
        Commands::Add(args) => commands::add::run(&store, &config, args),
        Commands::Edit(args) => commands::edit::run(&store, args),
        Commands::Delete { id } => commands::delete::run(&store, &id),
        Commands::Export { date, out } => commands::export::run(&store, &date, out),
    }
}

/// Log to stderr, filtered by RUST_LOG (default: warnings only).
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
