//! The persisted event collection.
//!
//! Every mutation reads the whole collection, computes the new one and writes
//! it back in a single `Storage::set`. There is no cross-process locking: two
//! writers racing on the same slot can drop each other's changes.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::conflict::find_conflict;
use crate::error::{MonthGridError, MonthGridResult};
use crate::event::Event;
use crate::storage::Storage;

/// Slot name used when none is configured.
pub const DEFAULT_SLOT: &str = "calendarEvents";

pub struct EventStore<S: Storage> {
    storage: S,
    slot: String,
}

impl<S: Storage> EventStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_slot(storage, DEFAULT_SLOT)
    }

    pub fn with_slot(storage: S, slot: impl Into<String>) -> Self {
        EventStore {
            storage,
            slot: slot.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Load every stored event.
    ///
    /// Missing, unreadable or malformed content yields an empty collection.
    pub fn load_all(&self) -> Vec<Event> {
        match self.load_for_write() {
            Ok(events) => events,
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "could not load events, treating as empty");
                vec![]
            }
        }
    }

    /// Load every stored event ahead of a mutation.
    ///
    /// Only an absent or blank slot counts as empty. Read failures and
    /// malformed content are errors, so the slot is never overwritten with a
    /// collection that lost records.
    fn load_for_write(&self) -> MonthGridResult<Vec<Event>> {
        let content = match self.storage.get(&self.slot)? {
            Some(content) if !content.trim().is_empty() => content,
            _ => return Ok(vec![]),
        };

        let events: Vec<Event> = serde_json::from_str(&content)?;
        debug!(slot = %self.slot, count = events.len(), "loaded events");
        Ok(events)
    }

    /// Replace the stored collection.
    pub fn save_all(&self, events: &[Event]) -> MonthGridResult<()> {
        let content = serde_json::to_string(events)?;
        self.storage.set(&self.slot, &content)?;
        debug!(slot = %self.slot, count = events.len(), "saved events");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<Event> {
        self.load_all().into_iter().find(|e| e.id == id)
    }

    /// Events on `date`, in collection order.
    pub fn events_on(&self, date: NaiveDate) -> Vec<Event> {
        self.load_all()
            .into_iter()
            .filter(|e| e.date == date)
            .collect()
    }

    /// Add a new event.
    ///
    /// Fails without writing if the event is invalid, its id is taken, or it
    /// overlaps another event on the same day.
    pub fn add(&self, event: Event) -> MonthGridResult<Event> {
        event.validate()?;

        let mut events = self.load_for_write()?;
        if events.iter().any(|e| e.id == event.id) {
            return Err(MonthGridError::DuplicateId(event.id));
        }
        check_conflict(&event, &events)?;

        events.push(event.clone());
        self.save_all(&events)?;

        info!(id = %event.id, date = %event.date, "added event");
        Ok(event)
    }

    /// Replace the stored event that has `event.id`.
    ///
    /// The event keeps its position in the collection. Conflicts are checked
    /// against the (possibly new) date, ignoring the event's previous self.
    pub fn update(&self, event: Event) -> MonthGridResult<Event> {
        event.validate()?;

        let mut events = self.load_for_write()?;
        let position = events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or_else(|| MonthGridError::EventNotFound(event.id.clone()))?;
        check_conflict(&event, &events)?;

        events[position] = event.clone();
        self.save_all(&events)?;

        info!(id = %event.id, date = %event.date, "updated event");
        Ok(event)
    }

    /// Remove the event with `id`, leaving every other record untouched.
    pub fn delete(&self, id: &str) -> MonthGridResult<Event> {
        let mut events = self.load_for_write()?;
        let position = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| MonthGridError::EventNotFound(id.to_string()))?;

        let removed = events.remove(position);
        self.save_all(&events)?;

        info!(id = %removed.id, date = %removed.date, "deleted event");
        Ok(removed)
    }
}

fn check_conflict(candidate: &Event, events: &[Event]) -> MonthGridResult<()> {
    match find_conflict(candidate, events) {
        Some(existing) => {
            warn!(
                id = %candidate.id,
                conflicts_with = %existing.id,
                date = %candidate.date,
                "rejected conflicting event"
            );
            Err(MonthGridError::Conflict {
                title: candidate.title.clone(),
                existing_id: existing.id.clone(),
                existing_title: existing.title.clone(),
                existing_start: existing.start_time.format("%H:%M").to_string(),
                existing_end: existing.end_time.format("%H:%M").to_string(),
                date: candidate.date,
            })
        }
        None => Ok(()),
    }
}
