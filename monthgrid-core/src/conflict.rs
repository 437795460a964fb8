//! Time conflict detection between events on the same day.

use crate::event::Event;

/// Whether two events' `[start, end)` intervals overlap.
///
/// Only meaningful for events on the same date. Touching boundaries
/// (`a.end == b.start`) do not conflict. Events whose end precedes their start
/// are compared as-is.
pub fn has_conflict(a: &Event, b: &Event) -> bool {
    a.start() < b.end() && a.end() > b.start()
}

/// First event in `events` that shares `candidate`'s date, is not `candidate`
/// itself (by id), and overlaps it.
pub fn find_conflict<'a>(candidate: &Event, events: &'a [Event]) -> Option<&'a Event> {
    events
        .iter()
        .filter(|e| e.date == candidate.date && e.id != candidate.id)
        .find(|e| has_conflict(e, candidate))
}
