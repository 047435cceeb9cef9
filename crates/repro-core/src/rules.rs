//! Time-windowed alert rules over the breeding timeline.
//!
//! # Rules
//!
//! 1. **Mating window**: a Mating is expected within `mating_window_days`
//!    after the latest Heat. Once the reference date is past the window with
//!    no Mating inside it, the missed window is flagged.
//! 2. **Farrowing projection**: the latest Mating projects a birth
//!    `gestation_days` later. Without a Birth recorded on or after
//!    `expected - birth_association_days`, the rule reminds during the
//!    `reminder_days` before the expected date and flags the birth as overdue
//!    once the reference date is more than `overdue_grace_days` past it.
//!
//! The farrowing rule says nothing for the first `overdue_grace_days` after
//! the expected date, nor earlier than `reminder_days` before it. That gap is
//! inherited behavior pending product clarification.
//!
//! Both rules are pure functions of the store and the reference date, and
//! neither reads the other's output.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::date::{add_days, days_between, format_date};
use crate::event_type::EventType;
use crate::selector::latest_at_or_before;
use crate::store::EventStore;

/// Biological interval constants used by the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Days after a Heat during which a Mating is expected.
    /// Default: 2.
    pub mating_window_days: i64,

    /// Gestation period from Mating to expected Birth.
    /// Default: 114.
    pub gestation_days: i64,

    /// Days before the expected date during which a reminder is shown.
    /// Default: 7.
    pub reminder_days: i64,

    /// A Birth on or after `expected - birth_association_days` accounts for
    /// the pregnancy.
    /// Default: 7.
    pub birth_association_days: i64,

    /// Days past the expected date before a birth counts as overdue.
    /// Default: 3.
    pub overdue_grace_days: i64,
}

/// Upper bound for every [`RuleConfig`] interval, roughly ten years.
pub const MAX_RULE_DAYS: i64 = 3650;

/// A [`RuleConfig`] interval outside `0..=MAX_RULE_DAYS`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("rules.{field} must be between 0 and {MAX_RULE_DAYS} days, got {value}")]
pub struct RuleConfigError {
    pub field: &'static str,
    pub value: i64,
}

impl RuleConfig {
    /// Checks that every interval is a non-negative day count within bounds.
    pub fn validate(&self) -> Result<(), RuleConfigError> {
        let fields = [
            ("mating_window_days", self.mating_window_days),
            ("gestation_days", self.gestation_days),
            ("reminder_days", self.reminder_days),
            ("birth_association_days", self.birth_association_days),
            ("overdue_grace_days", self.overdue_grace_days),
        ];
        for (field, value) in fields {
            if !(0..=MAX_RULE_DAYS).contains(&value) {
                return Err(RuleConfigError { field, value });
            }
        }
        Ok(())
    }
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            mating_window_days: 2,
            gestation_days: 114,
            reminder_days: 7,
            birth_association_days: 7,
            overdue_grace_days: 3,
        }
    }
}

/// The inclusive interval after a Heat in which a Mating should happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatingWindow {
    pub heat: NaiveDate,
    pub end: NaiveDate,
}

impl MatingWindow {
    pub fn after_heat(heat: NaiveDate, config: &RuleConfig) -> Self {
        Self {
            heat,
            end: add_days(heat, config.mating_window_days),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.heat <= date && date <= self.end
    }
}

/// Key dates projected from a Mating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestationWindow {
    pub mating: NaiveDate,
    pub expected: NaiveDate,
    /// First day of the "birth expected" reminder.
    pub reminder_from: NaiveDate,
    /// Earliest Birth date that accounts for this pregnancy.
    pub association_from: NaiveDate,
    /// Last day that is not yet reported as overdue.
    pub overdue_after: NaiveDate,
}

impl GestationWindow {
    pub fn after_mating(mating: NaiveDate, config: &RuleConfig) -> Self {
        let expected = add_days(mating, config.gestation_days);
        Self {
            mating,
            expected,
            reminder_from: add_days(expected, config.reminder_days.saturating_neg()),
            association_from: add_days(expected, config.birth_association_days.saturating_neg()),
            overdue_after: add_days(expected, config.overdue_grace_days),
        }
    }
}

/// A management alert derived for a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alert {
    /// No Mating inside the window after the latest Heat.
    MissedMating {
        #[serde(with = "crate::date::canonical")]
        heat_date: NaiveDate,
        window_days: i64,
    },
    /// The projected birth date is near.
    BirthExpected {
        #[serde(with = "crate::date::canonical")]
        expected: NaiveDate,
    },
    /// The projected birth date is well past with no Birth recorded.
    BirthOverdue {
        #[serde(with = "crate::date::canonical")]
        expected: NaiveDate,
    },
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissedMating {
                heat_date,
                window_days,
            } => write!(
                f,
                concat!(
                    "No Mating was recorded after the Heat on {} ",
                    "(recommended window: 0\u{2013}{} days)"
                ),
                format_date(*heat_date),
                window_days
            ),
            Self::BirthExpected { expected } => write!(
                f,
                "Birth expected around {} (prepare pens/attention)",
                format_date(*expected)
            ),
            Self::BirthOverdue { expected } => write!(
                f,
                "Birth overdue since ~{} and no birth recorded. Verify animal status.",
                format_date(*expected)
            ),
        }
    }
}

/// Flags a missed mating window after the latest Heat on or before
/// `reference`.
pub fn mating_window_alert(
    store: &EventStore,
    reference: NaiveDate,
    config: &RuleConfig,
) -> Option<Alert> {
    let last_heat = latest_at_or_before(store.events_of_type(EventType::Heat), reference)?;
    let window = MatingWindow::after_heat(last_heat.date, config);

    let mated = store
        .events_of_type(EventType::Mating)
        .any(|m| window.contains(m.date));

    tracing::trace!(heat = %window.heat, end = %window.end, mated, "mating window rule");

    // Silent until the window has fully elapsed.
    if mated || reference <= window.end {
        return None;
    }

    Some(Alert::MissedMating {
        heat_date: window.heat,
        window_days: config.mating_window_days,
    })
}

/// Reminds of, or flags as overdue, the birth projected from the latest
/// Mating on or before `reference`.
pub fn farrowing_alert(
    store: &EventStore,
    reference: NaiveDate,
    config: &RuleConfig,
) -> Option<Alert> {
    let last_mating = latest_at_or_before(store.events_of_type(EventType::Mating), reference)?;
    let gestation = GestationWindow::after_mating(last_mating.date, config);

    let birth_recorded = store
        .events_of_type(EventType::Birth)
        .any(|b| b.date >= gestation.association_from);

    let diff = days_between(gestation.expected, reference);
    tracing::trace!(expected = %gestation.expected, diff, birth_recorded, "farrowing rule");

    if birth_recorded {
        return None;
    }

    if (config.reminder_days.saturating_neg()..=0).contains(&diff) {
        Some(Alert::BirthExpected {
            expected: gestation.expected,
        })
    } else if diff > config.overdue_grace_days {
        Some(Alert::BirthOverdue {
            expected: gestation.expected,
        })
    } else {
        None
    }
}

/// Runs both rules in their fixed order: mating window first, then
/// farrowing projection.
pub fn evaluate_rules(
    store: &EventStore,
    reference: NaiveDate,
    config: &RuleConfig,
) -> Vec<Alert> {
    [
        mating_window_alert(store, reference, config),
        farrowing_alert(store, reference, config),
    ]
    .into_iter()
    .flatten()
    .collect()
}
