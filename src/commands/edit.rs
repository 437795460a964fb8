use anyhow::Result;
use clap::Args;
use monthgrid_core::event::{parse_date, parse_time};
use monthgrid_core::storage::Storage;
use monthgrid_core::{Event, EventColor, EventStore};
use owo_colors::OwoColorize;

#[derive(Args, Debug, Clone, Default)]
pub struct EditArgs {
    /// Id of the event to change
    pub id: String,

    #[arg(short, long)]
    pub title: Option<String>,

    /// Move the event to another day (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New start time (HH:MM)
    #[arg(short, long)]
    pub start: Option<String>,

    /// New end time (HH:MM)
    #[arg(short, long)]
    pub end: Option<String>,

    /// New description (empty string clears it)
    #[arg(short, long)]
    pub description: Option<String>,

    /// New category: work, personal or other
    #[arg(short, long, conflicts_with = "no_color")]
    pub color: Option<EventColor>,

    /// Remove the category
    #[arg(long)]
    pub no_color: bool,
}

pub fn run<S: Storage>(store: &EventStore<S>, args: EditArgs) -> Result<()> {
    let Some(existing) = store.get(&args.id) else {
        anyhow::bail!("Event '{}' not found", args.id);
    };

    let updated = store.update(apply_edits(existing, &args)?)?;

    println!(
        "{} {} on {} {}",
        "Updated".yellow(),
        updated.title,
        updated.date,
        updated.time_range().dimmed()
    );

    Ok(())
}

/// Apply the requested changes; untouched fields keep their value.
fn apply_edits(mut event: Event, args: &EditArgs) -> Result<Event> {
    if let Some(title) = &args.title {
        event.title = title.clone();
    }
    if let Some(date) = &args.date {
        event.date = parse_date(date)?;
    }
    if let Some(start) = &args.start {
        event.start_time = parse_time(start)?;
    }
    if let Some(end) = &args.end {
        event.end_time = parse_time(end)?;
    }
    if let Some(description) = &args.description {
        event.description = Some(description.clone()).filter(|d| !d.is_empty());
    }
    if args.no_color {
        event.color = None;
    } else if let Some(color) = args.color {
        event.color = Some(color);
    }
    Ok(event)
}
