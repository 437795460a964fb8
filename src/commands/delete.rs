use anyhow::Result;
use monthgrid_core::EventStore;
use monthgrid_core::storage::Storage;
use owo_colors::OwoColorize;

pub fn run<S: Storage>(store: &EventStore<S>, id: &str) -> Result<()> {
    let removed = store.delete(id)?;

    println!(
        "{} {} {}",
        "Deleted".red(),
        removed.title,
        removed.date.to_string().dimmed()
    );

    Ok(())
}
