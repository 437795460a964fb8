//! Core types for monthgrid.
//!
//! - `event`: the single-day timed `Event` and its JSON shape
//! - `grid`: the 42-cell Monday-first month grid and month navigation
//! - `conflict`: same-day time overlap checks
//! - `storage` / `store`: named-slot storage and the persisted event list
//! - `export`: per-day JSON export
//! - `config`: global configuration

pub mod config;
pub mod conflict;
pub mod error;
pub mod event;
pub mod export;
pub mod grid;
pub mod storage;
pub mod store;

pub use conflict::{find_conflict, has_conflict};
pub use error::{MonthGridError, MonthGridResult};
pub use event::{Event, EventColor};
pub use grid::{DayCell, MonthView, build_month_grid};
pub use store::EventStore;
