//! A reproduction-control session: one event timeline plus the selected day.
//!
//! The session is the hand-off point for the calendar and the presentation
//! layer. It owns its store exclusively, so every read sees a fully applied
//! mutation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::alerts::{AlertReport, evaluate};
use crate::event::{Event, EventId};
use crate::event_type::EventType;
use crate::rules::RuleConfig;
use crate::store::EventStore;

/// Errors surfaced to the user from session operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// An operation needed a reference date but none is selected.
    #[error("select a date first")]
    NoDateSelected,
}

/// Last computed report and the inputs it was computed from.
#[derive(Debug, Clone)]
struct CachedReport {
    version: u64,
    reference: Option<NaiveDate>,
    report: AlertReport,
}

/// Event timeline and selected reference date for one screen session.
#[derive(Debug, Clone, Default)]
pub struct ReproductionSession {
    store: EventStore,
    selected: Option<NaiveDate>,
    config: RuleConfig,
    cache: Option<CachedReport>,
}

impl ReproductionSession {
    /// Creates an empty session using the given rule constants.
    pub fn new(config: RuleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Creates a session over an existing timeline.
    pub fn with_store(store: EventStore, config: RuleConfig) -> Self {
        Self {
            store,
            config,
            ..Self::default()
        }
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        tracing::debug!(%date, "selected reference date");
        self.selected = Some(date);
    }

    pub const fn selected_date(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub const fn store(&self) -> &EventStore {
        &self.store
    }

    pub const fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Records an event of `event_type` on the selected date.
    pub fn register_event(&mut self, event_type: EventType) -> Result<Event, SessionError> {
        let date = self.selected.ok_or(SessionError::NoDateSelected)?;
        Ok(self.store.append(event_type, date))
    }

    /// Deletes an event. Unknown ids are ignored.
    pub fn delete_event(&mut self, id: EventId) -> bool {
        self.store.remove(id)
    }

    /// Events recorded on the selected date, in insertion order.
    pub fn events_for_selected_day(&self) -> Result<Vec<&Event>, SessionError> {
        let date = self.selected.ok_or(SessionError::NoDateSelected)?;
        Ok(self.store.events_on_date(date).collect())
    }

    /// Alert report for the selected date against the current timeline.
    ///
    /// Reuses the previous report when neither the store nor the selected
    /// date changed since it was computed.
    pub fn alerts(&mut self) -> AlertReport {
        let version = self.store.version();
        let reference = self.selected;
        if let Some(cached) = self
            .cache
            .as_ref()
            .filter(|c| c.version == version && c.reference == reference)
        {
            tracing::debug!(version, "alert report cache hit");
            return cached.report.clone();
        }

        let report = evaluate(&self.store, self.selected, &self.config);
        self.cache = Some(CachedReport {
            version,
            reference: self.selected,
            report: report.clone(),
        });
        report
    }
}
