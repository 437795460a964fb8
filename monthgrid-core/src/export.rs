//! Export of a single day's events as a standalone JSON document.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{MonthGridError, MonthGridResult};
use crate::event::Event;

/// A rendered export, ready to be written or offered for download.
#[derive(Debug, Clone, PartialEq)]
pub struct DayExport {
    pub file_name: String,
    pub contents: String,
}

/// `events-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("events-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize `events` (already filtered to `date`) as pretty-printed JSON.
pub fn export_day(date: NaiveDate, events: &[Event]) -> MonthGridResult<DayExport> {
    let contents = serde_json::to_string_pretty(events)?;
    Ok(DayExport {
        file_name: export_file_name(date),
        contents,
    })
}

impl DayExport {
    /// Write the document into `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> MonthGridResult<PathBuf> {
        std::fs::create_dir_all(dir).map_err(|e| {
            MonthGridError::Storage(format!("Could not create {}: {e}", dir.display()))
        })?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.contents)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventColor;
    use chrono::NaiveTime;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn standup() -> Event {
        Event {
            id: "e1".to_string(),
            title: "Standup".to_string(),
            description: Some("Daily".to_string()),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
            date: day(),
            color: Some(EventColor::Work),
        }
    }

    #[test]
    fn file_name_uses_iso_date() {
        assert_eq!(export_file_name(day()), "events-2024-06-01.json");
    }

    #[test]
    fn contents_are_pretty_printed_and_parse_back() {
        let export = export_day(day(), &[standup()]).unwrap();

        assert!(export.contents.starts_with("[\n  {"));
        assert!(export.contents.contains("\"startTime\": \"09:00\""));

        let parsed: Vec<Event> = serde_json::from_str(&export.contents).unwrap();
        assert_eq!(parsed, vec![standup()]);
    }

    #[test]
    fn empty_day_exports_empty_array() {
        let export = export_day(day(), &[]).unwrap();
        assert_eq!(export.contents, "[]");
    }

    #[test]
    fn write_to_creates_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let export = export_day(day(), &[standup()]).unwrap();

        let path = export.write_to(dir.path()).unwrap();
        assert_eq!(path, dir.path().join("events-2024-06-01.json"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), export.contents);
    }
}
