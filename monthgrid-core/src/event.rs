//! Event types.
//!
//! An event lives on exactly one calendar day and spans a wall-clock time
//! range on that day. The serialized shape is the flat JSON record kept in the
//! storage slot: `id`, `title`, `description?`, `startTime`, `endTime`, `date`
//! and `color?`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{MonthGridError, MonthGridResult};

/// A timed calendar entry for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<EventColor>,
}

/// Category tag for an event. Absence means uncategorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Work,
    Personal,
    Other,
}

impl Event {
    /// Create an event with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Event {
            id: generate_id(),
            title: title.into(),
            description: None,
            start_time,
            end_time,
            date,
            color: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_color(mut self, color: EventColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Start of the event anchored to its date.
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    /// End of the event anchored to its date.
    pub fn end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Check the invariants the data model itself carries.
    ///
    /// Only the title is required. `start_time < end_time` is deliberately not
    /// checked here.
    pub fn validate(&self) -> MonthGridResult<()> {
        if self.title.trim().is_empty() {
            return Err(MonthGridError::InvalidEvent("title must not be empty".into()));
        }
        if self.id.is_empty() {
            return Err(MonthGridError::InvalidEvent("id must not be empty".into()));
        }
        Ok(())
    }

    /// Case-insensitive match of `term` against the title or description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }

    /// Time range for display, e.g. "09:00 - 10:00".
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format(hhmm::FORMAT),
            self.end_time.format(hhmm::FORMAT)
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Events matching a search term, in collection order.
pub fn search<'a>(events: &'a [Event], term: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| e.matches(term)).collect()
}

/// Opaque unique identifier for a new event.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Parse a wall-clock time in `HH:MM` form.
pub fn parse_time(s: &str) -> MonthGridResult<NaiveTime> {
    hhmm::parse(s).ok_or_else(|| {
        MonthGridError::InvalidEvent(format!("Invalid time '{}'. Expected HH:MM", s))
    })
}

/// Parse an ISO calendar date (`YYYY-MM-DD`).
pub fn parse_date(s: &str) -> MonthGridResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
        MonthGridError::InvalidEvent(format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
    })
}

impl EventColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventColor::Work => "work",
            EventColor::Personal => "personal",
            EventColor::Other => "other",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventColor {
    type Err = MonthGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work" => Ok(EventColor::Work),
            "personal" => Ok(EventColor::Personal),
            "other" => Ok(EventColor::Other),
            _ => Err(MonthGridError::InvalidEvent(format!(
                "Unknown category '{}'. Expected one of: work, personal, other",
                s
            ))),
        }
    }
}

/// Serde adapter for `HH:MM` wall-clock times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%H:%M";

    /// Seconds are rejected since they would not survive serialization.
    pub fn parse(s: &str) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(s, FORMAT).ok()
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid time '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn serializes_flat_camel_case_record() {
        let event = Event {
            id: "abc".to_string(),
            title: "Standup".to_string(),
            description: None,
            start_time: at(9, 0),
            end_time: at(9, 15),
            date: june_first(),
            color: Some(EventColor::Work),
        };

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "title": "Standup",
                "startTime": "09:00",
                "endTime": "09:15",
                "date": "2024-06-01",
                "color": "work"
            })
        );
    }

    #[test]
    fn deserializes_record_without_optional_fields() {
        let json = r#"{"id":"1","title":"Lunch","startTime":"12:00","endTime":"13:00","date":"2024-06-02"}"#;
        let event: Event = serde_json::from_str(json).unwrap();

        assert_eq!(event.description, None);
        assert_eq!(event.color, None);
        assert_eq!(event.start_time, at(12, 0));
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
    }

    #[test]
    fn rejects_unknown_color_tag() {
        let json = r#"{"id":"1","title":"x","startTime":"12:00","endTime":"13:00","date":"2024-06-02","color":"blue"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn rejects_times_with_seconds() {
        let json = r#"{"id":"1","title":"x","startTime":"09:30:45","endTime":"10:00","date":"2024-06-02"}"#;
        assert!(serde_json::from_str::<Event>(json).is_err());
    }

    #[test]
    fn matches_title_or_description_case_insensitively() {
        let event = Event::new("Team Sync", june_first(), at(9, 0), at(10, 0))
            .with_description("Quarterly PLANNING");

        assert!(event.matches("sync"));
        assert!(event.matches("planning"));
        assert!(event.matches(""));
        assert!(!event.matches("retro"));
    }

    #[test]
    fn search_keeps_collection_order() {
        let events = vec![
            Event::new("Gym", june_first(), at(7, 0), at(8, 0)),
            Event::new("Dentist", june_first(), at(9, 0), at(10, 0)),
            Event::new("Gym again", june_first(), at(18, 0), at(19, 0)),
        ];

        let titles: Vec<_> = search(&events, "GYM").iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Gym", "Gym again"]);
    }

    #[test]
    fn validate_requires_title() {
        let event = Event::new("   ", june_first(), at(9, 0), at(10, 0));
        assert!(matches!(event.validate(), Err(MonthGridError::InvalidEvent(_))));
    }

    #[test]
    fn validate_allows_end_before_start() {
        let event = Event::new("Backwards", june_first(), at(11, 0), at(10, 0));
        assert!(event.validate().is_ok());
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = Event::new("a", june_first(), at(9, 0), at(10, 0));
        let b = Event::new("a", june_first(), at(9, 0), at(10, 0));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn parses_times_and_dates() {
        assert_eq!(parse_time("09:30").unwrap(), at(9, 30));
        assert!(parse_time("09:30:00").is_err());
        assert!(parse_time("9.30").is_err());
        assert_eq!(parse_date("2024-06-01").unwrap(), june_first());
        assert!(parse_date("06/01/2024").is_err());
    }

    #[test]
    fn color_parses_case_insensitively() {
        assert_eq!("Personal".parse::<EventColor>().unwrap(), EventColor::Personal);
        assert!("blue".parse::<EventColor>().is_err());
    }
}
