//! Terminal rendering for monthgrid types.
//!
//! Extension traits that add colored output to monthgrid-core types using
//! owo_colors.

use chrono::Datelike;
use monthgrid_core::grid::WEEKDAYS;
use monthgrid_core::{DayCell, Event, EventColor, MonthView};
use owo_colors::OwoColorize;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Titles shown per day before collapsing into a "+N" count.
const VISIBLE_EVENTS: usize = 2;

/// Visible width of one grid cell, excluding the separating space.
const CELL_WIDTH: usize = 8;

/// Colorize text according to the event category
fn colorize(color: Option<EventColor>, text: &str) -> String {
    match color {
        Some(EventColor::Work) => text.blue().to_string(),
        Some(EventColor::Personal) => text.green().to_string(),
        Some(EventColor::Other) => text.magenta().to_string(),
        None => text.to_string(),
    }
}

impl Render for EventColor {
    fn render(&self) -> String {
        colorize(Some(*self), &format!("[{}]", self))
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut line = format!(
            "  {}  {}",
            self.time_range().bold(),
            colorize(self.color, &self.title)
        );
        if let Some(color) = self.color {
            line.push(' ');
            line.push_str(&color.render());
        }
        line.push_str(&format!("  {}", self.id.dimmed()));

        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            line.push_str(&format!("\n      {}", description.dimmed()));
        }
        line
    }
}

impl Render for DayCell {
    fn render(&self) -> String {
        let day = format!("{:>2}", self.date.day());
        let day = if self.is_today {
            day.reversed().bold().to_string()
        } else if !self.is_current_month {
            day.dimmed().to_string()
        } else if !self.events.is_empty() {
            day.bold().to_string()
        } else {
            day
        };

        let (markers, width) = event_markers(&self.events);
        let padding = CELL_WIDTH.saturating_sub(2 + 1 + width);

        format!("{} {}{}", day, markers, " ".repeat(padding))
    }
}

/// One colored dot per visible event plus an overflow count, e.g. "●●+3".
/// Returns the rendered markers and their visible width.
fn event_markers(events: &[Event]) -> (String, usize) {
    let mut rendered = String::new();
    let mut width = 0;

    for event in events.iter().take(VISIBLE_EVENTS) {
        rendered.push_str(&colorize(event.color, "●"));
        width += 1;
    }

    let hidden = events.len().saturating_sub(VISIBLE_EVENTS);
    if hidden > 0 {
        let more = format!("+{}", hidden);
        width += more.len();
        rendered.push_str(&more.dimmed().to_string());
    }

    (rendered, width)
}

/// Render a month heading, the weekday header and six weeks of cells.
pub fn render_month(view: &MonthView, cells: &[DayCell]) -> String {
    let mut lines = Vec::new();

    lines.push(view.to_string().bold().to_string());

    let header: Vec<String> = WEEKDAYS
        .iter()
        .map(|d| format!("{:<width$}", d, width = CELL_WIDTH))
        .collect();
    lines.push(header.join(" ").dimmed().to_string());

    for week in cells.chunks(7) {
        let row: Vec<String> = week.iter().map(|c| c.render()).collect();
        lines.push(row.join(" "));
    }

    let total: usize = cells
        .iter()
        .filter(|c| c.is_current_month)
        .map(|c| c.events.len())
        .sum();
    lines.push(String::new());
    lines.push(
        format!("{} {} this month", total, pluralize("event", total))
            .dimmed()
            .to_string(),
    );

    lines.join("\n")
}

/// Render the event list for one day
pub fn render_day(heading: &str, events: &[&Event]) -> String {
    let mut lines = vec![heading.bold().to_string()];

    if events.is_empty() {
        lines.push(format!("  {}", "No events found".dimmed()));
    } else {
        lines.extend(events.iter().map(|e| e.render()));
    }

    lines.join("\n")
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use monthgrid_core::build_month_grid;

    fn event(title: &str, color: Option<EventColor>) -> Event {
        Event {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: None,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
            color,
        }
    }

    #[test]
    fn markers_cap_visible_events() {
        let events = vec![
            event("A", Some(EventColor::Work)),
            event("B", None),
            event("C", None),
            event("D", None),
        ];
        let (markers, width) = event_markers(&events);
        assert_eq!(width, 4);
        assert!(markers.contains("+2"));
    }

    #[test]
    fn markers_empty_for_free_day() {
        assert_eq!(event_markers(&[]), (String::new(), 0));
    }

    #[test]
    fn month_has_heading_header_and_six_weeks() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let view = MonthView::new(2024, 5).unwrap();
        let cells = build_month_grid(2024, 5, &[event("A", None)], today).unwrap();

        let output = render_month(&view, &cells);
        let lines: Vec<_> = output.lines().collect();

        assert!(lines[0].contains("June 2024"));
        assert!(lines[1].contains("Mon") && lines[1].contains("Sun"));
        // heading + header + 6 weeks + blank + summary
        assert_eq!(lines.len(), 10);
        assert!(output.contains("1 event this month"));
    }

    #[test]
    fn day_without_events_says_so() {
        let output = render_day("Mon Jun 3 2024", &[]);
        assert!(output.contains("No events found"));
    }

    #[test]
    fn event_line_shows_time_title_and_description() {
        let mut e = event("Standup", Some(EventColor::Personal));
        e.description = Some("Room 4".to_string());

        let output = e.render();
        assert!(output.contains("09:00 - 10:00"));
        assert!(output.contains("Standup"));
        assert!(output.contains("personal"));
        assert!(output.contains("Room 4"));
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 0), "events");
    }
}
