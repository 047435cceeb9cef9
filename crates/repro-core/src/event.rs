//! Reproductive events on the breeding timeline.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event_type::EventType;

/// Identifier assigned by the [`EventStore`](crate::EventStore) on append.
///
/// Ids are never reused within a store, so an id stays valid (or absent)
/// for the whole lifetime of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// A single heat, mating or birth recorded on a calendar day.
///
/// Events are immutable: the timeline only ever appends or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Calendar day, serialized as `YYYY-MM-DD`.
    #[serde(with = "crate::date::canonical")]
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl Event {
    pub const fn new(id: EventId, event_type: EventType, date: NaiveDate) -> Self {
        Self {
            id,
            date,
            event_type,
        }
    }

    /// Display text, derived from the event type.
    pub const fn description(&self) -> &'static str {
        self.event_type.description()
    }
}
