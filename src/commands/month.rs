use anyhow::{Context, Result};
use chrono::NaiveDate;
use monthgrid_core::grid::build_grid_for;
use monthgrid_core::storage::Storage;
use monthgrid_core::{EventStore, MonthView};

use crate::render::render_month;

pub fn run<S: Storage>(
    store: &EventStore<S>,
    year: Option<i64>,
    month: Option<i64>,
    json: bool,
    today: NaiveDate,
) -> Result<()> {
    let view = resolve_view(year, month, today)?;
    let events = store.load_all();
    let cells = build_grid_for(view, &events, today)?;

    if json {
        let output = serde_json::to_string_pretty(&cells).context("Failed to serialize grid")?;
        println!("{}", output);
    } else {
        println!("{}", render_month(&view, &cells));
    }

    Ok(())
}

/// Pick the month to show. `month` is 1-based as typed by the user; missing
/// values fall back to the month containing `today`.
fn resolve_view(year: Option<i64>, month: Option<i64>, today: NaiveDate) -> Result<MonthView> {
    let current = MonthView::containing(today);
    let year = year.unwrap_or(current.year() as i64);
    let month0 = match month {
        Some(m) => m
            .checked_sub(1)
            .ok_or_else(|| anyhow::anyhow!("Month {} is out of range", m))?,
        None => current.month0() as i64,
    };

    Ok(MonthView::new(year, month0)?)
}
