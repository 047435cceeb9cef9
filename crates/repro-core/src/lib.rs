//! Core domain logic for the breeding-cycle tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Dates: timezone-free calendar parsing and day arithmetic
//! - Timeline: the insertion-ordered store of Heat, Mating and Birth events
//! - Alerts: the mating-window and farrowing-projection rules
//! - Session: the selected day plus a memoized alert report

pub mod alerts;
pub mod date;
mod event;
pub mod event_type;
pub mod rules;
mod selector;
pub mod session;
mod store;

pub use alerts::{AlertReport, evaluate};
pub use date::{DateError, add_days, days_between, format_date, parse_date};
pub use event::{Event, EventId};
pub use event_type::{EventType, UnknownEventType};
pub use rules::{
    Alert, GestationWindow, MAX_RULE_DAYS, MatingWindow, RuleConfig, RuleConfigError,
    evaluate_rules,
};
pub use selector::latest_at_or_before;
pub use session::{ReproductionSession, SessionError};
pub use store::{EventStore, MAX_EVENT_ID, StoreError};
