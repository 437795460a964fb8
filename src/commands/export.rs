use std::path::PathBuf;

use anyhow::{Context, Result};
use monthgrid_core::EventStore;
use monthgrid_core::event::parse_date;
use monthgrid_core::export::export_day;
use monthgrid_core::storage::Storage;
use owo_colors::OwoColorize;

use crate::render::pluralize;

pub fn run<S: Storage>(store: &EventStore<S>, date: &str, out: Option<PathBuf>) -> Result<()> {
    let date = parse_date(date)?;
    let events = store.events_on(date);
    let export = export_day(date, &events)?;

    let dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir().context("Could not determine current directory")?,
    };
    let path = export.write_to(&dir)?;

    println!(
        "{} {} {} to {}",
        "Exported".green(),
        events.len(),
        pluralize("event", events.len()),
        path.display()
    );

    Ok(())
}
