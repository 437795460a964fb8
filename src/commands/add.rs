use anyhow::Result;
use clap::Args;
use monthgrid_core::config::MonthGridConfig;
use monthgrid_core::event::{parse_date, parse_time};
use monthgrid_core::storage::Storage;
use monthgrid_core::{Event, EventColor, EventStore};
use owo_colors::OwoColorize;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Date (YYYY-MM-DD)
    pub date: String,

    /// Event title
    pub title: String,

    /// Start time (HH:MM, defaults to default_start from config)
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (HH:MM, defaults to default_end from config)
    #[arg(short, long)]
    pub end: Option<String>,

    /// Event description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Category: work, personal or other (defaults to default_color from config)
    #[arg(short, long)]
    pub color: Option<EventColor>,
}

pub fn run<S: Storage>(store: &EventStore<S>, config: &MonthGridConfig, args: AddArgs) -> Result<()> {
    let event = build_event(config, args)?;
    let event = store.add(event)?;

    println!(
        "{} {} on {} {}",
        "Created".green(),
        event.title,
        event.date,
        event.time_range().dimmed()
    );
    println!("  {}", event.id.dimmed());

    Ok(())
}

/// Turn command-line input plus configured defaults into a new event.
fn build_event(config: &MonthGridConfig, args: AddArgs) -> Result<Event> {
    let date = parse_date(&args.date)?;
    let (default_start, default_end) = config.default_times()?;

    let start = match args.start.as_deref() {
        Some(s) => parse_time(s)?,
        None => default_start,
    };
    let end = match args.end.as_deref() {
        Some(s) => parse_time(s)?,
        None => default_end,
    };

    if end <= start {
        warn!(%start, %end, "event ends before it starts");
    }

    let mut event = Event::new(args.title, date, start, end);
    event.description = args.description.filter(|d| !d.is_empty());
    event.color = args.color.or(config.default_color);

    Ok(event)
}
