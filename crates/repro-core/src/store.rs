//! Insertion-ordered store of reproductive events.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::event::{Event, EventId};
use crate::event_type::EventType;

/// Largest id a store hands out or accepts on import.
pub const MAX_EVENT_ID: u64 = i64::MAX as u64;

/// Errors from rebuilding a store out of externally supplied events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate event id {0}")]
    DuplicateId(EventId),

    /// The id leaves no room for further events.
    #[error("event id {0} exceeds the maximum of {MAX_EVENT_ID}")]
    IdSpaceExhausted(EventId),
}

/// The event timeline of one session.
///
/// Ordering is insertion order only. Every temporal question is answered by
/// comparing event dates, never by position.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    next_id: u64,
    version: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from events handed over by a persistence layer.
    ///
    /// Insertion order follows the input. Fresh ids continue after the
    /// largest id seen.
    pub fn from_events(events: impl IntoIterator<Item = Event>) -> Result<Self, StoreError> {
        let mut store = Self::default();
        let mut seen = HashSet::new();
        for event in events {
            if event.id.get() >= MAX_EVENT_ID {
                return Err(StoreError::IdSpaceExhausted(event.id));
            }
            if !seen.insert(event.id) {
                return Err(StoreError::DuplicateId(event.id));
            }
            store.next_id = store.next_id.max(event.id.get() + 1);
            store.events.push(event);
        }
        tracing::debug!(events = store.events.len(), "loaded event store");
        Ok(store)
    }

    /// Records a new event and returns it.
    pub fn append(&mut self, event_type: EventType, date: NaiveDate) -> Event {
        // Ids start at 1 so that 0 never names a live event.
        let id = EventId::new(self.next_id.max(1));
        self.next_id = id.get().saturating_add(1);
        self.version += 1;

        let event = Event::new(id, event_type, date);
        tracing::debug!(%id, %event_type, %date, "appended event");
        self.events.push(event.clone());
        event
    }

    /// Deletes the event with `id`. Returns whether anything was removed;
    /// unknown ids are ignored.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;
        if removed {
            self.version += 1;
            tracing::debug!(%id, "removed event");
        } else {
            tracing::debug!(%id, "remove ignored, no such event");
        }
        removed
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn events_of_type(&self, event_type: EventType) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.event_type == event_type)
    }

    pub fn events_on_date(&self, date: NaiveDate) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.date == date)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Counter bumped by every mutation that changed the store.
    pub const fn version(&self) -> u64 {
        self.version
    }
}
