//! Month grid generation.
//!
//! A month is always rendered as six Monday-first weeks: the tail of the
//! previous month, every day of the month, then the start of the next month
//! until 42 cells exist.

use std::collections::HashMap;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::{MonthGridError, MonthGridResult};
use crate::event::Event;

/// Number of cells in a rendered month (6 weeks x 7 days).
pub const GRID_CELLS: usize = 42;

pub const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One position in the month grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub events: Vec<Event>,
}

/// A (year, zero-based month) pair, always normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthView {
    year: i32,
    month0: u32,
}

impl MonthView {
    /// Build a view from any year/month pair. Months outside 0..=11 roll over
    /// into neighbouring years, so `(2024, 12)` is January 2025 and
    /// `(2024, -1)` is December 2023.
    pub fn new(year: i64, month: i64) -> MonthGridResult<Self> {
        let out_of_range = || MonthGridError::DateOutOfRange { year, month };

        let total = year
            .checked_mul(12)
            .and_then(|y| y.checked_add(month))
            .ok_or_else(out_of_range)?;
        let year_norm = i32::try_from(total.div_euclid(12)).map_err(|_| out_of_range())?;
        let month0 = total.rem_euclid(12) as u32;

        // chrono only represents roughly +/-262,000 years.
        NaiveDate::from_ymd_opt(year_norm, month0 + 1, 1).ok_or_else(out_of_range)?;

        Ok(MonthView {
            year: year_norm,
            month0,
        })
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        MonthView {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 = January).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn previous(&self) -> MonthGridResult<Self> {
        Self::new(self.year as i64, self.month0 as i64 - 1)
    }

    pub fn next(&self) -> MonthGridResult<Self> {
        Self::new(self.year as i64, self.month0 as i64 + 1)
    }

    pub fn first_day(&self) -> MonthGridResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).ok_or(
            MonthGridError::DateOutOfRange {
                year: self.year as i64,
                month: self.month0 as i64,
            },
        )
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

/// Build the 42-cell grid for `month` (zero-based, normalized by rollover) of
/// `year`.
///
/// `events` is the full collection; each cell receives the events dated on
/// it, in collection order. `today` only drives the `is_today` flag.
pub fn build_month_grid(
    year: i64,
    month: i64,
    events: &[Event],
    today: NaiveDate,
) -> MonthGridResult<Vec<DayCell>> {
    let view = MonthView::new(year, month)?;
    build_grid_for(view, events, today)
}

/// Same as [`build_month_grid`] for an already normalized view.
pub fn build_grid_for(
    view: MonthView,
    events: &[Event],
    today: NaiveDate,
) -> MonthGridResult<Vec<DayCell>> {
    let first = view.first_day()?;
    let leading = first.weekday().num_days_from_monday() as i64;

    let grid_start = first
        .checked_sub_signed(Duration::days(leading))
        .ok_or(MonthGridError::DateOutOfRange {
            year: view.year as i64,
            month: view.month0 as i64,
        })?;

    let mut by_date: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();
    for event in events {
        by_date.entry(event.date).or_default().push(event);
    }

    let mut cells = Vec::with_capacity(GRID_CELLS);
    for date in grid_start.iter_days().take(GRID_CELLS) {
        cells.push(DayCell {
            date,
            is_current_month: view.contains(date),
            is_today: date == today,
            events: by_date
                .get(&date)
                .map(|evs| evs.iter().map(|e| (*e).clone()).collect())
                .unwrap_or_default(),
        });
    }

    if cells.len() != GRID_CELLS {
        return Err(MonthGridError::DateOutOfRange {
            year: view.year as i64,
            month: view.month0 as i64,
        });
    }

    Ok(cells)
}
