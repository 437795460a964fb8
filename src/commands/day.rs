use anyhow::Result;
use monthgrid_core::EventStore;
use monthgrid_core::event::{parse_date, search};
use monthgrid_core::storage::Storage;

use crate::render::render_day;

pub fn run<S: Storage>(store: &EventStore<S>, date: &str, term: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let events = store.events_on(date);
    let shown = search(&events, term.unwrap_or(""));

    let heading = format!("Events for {}", date.format("%a %b %-d %Y"));
    println!("{}", render_day(&heading, &shown));

    Ok(())
}
