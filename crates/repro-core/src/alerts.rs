//! Alert derivation for a reference date.

use chrono::NaiveDate;

use crate::rules::{Alert, RuleConfig, evaluate_rules};
use crate::store::EventStore;

/// Outcome of evaluating the alert rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertReport {
    /// No reference date was selected, so no rule ran.
    NoDateSelected,
    /// Alerts for the reference date in rule order. Empty means no alerts.
    Alerts(Vec<Alert>),
}

impl AlertReport {
    /// Human-readable alert messages in rule order.
    ///
    /// Empty for [`AlertReport::NoDateSelected`] as well; callers that need to
    /// tell the two apart match on the report.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::NoDateSelected => Vec::new(),
            Self::Alerts(alerts) => alerts.iter().map(ToString::to_string).collect(),
        }
    }

    pub fn alerts(&self) -> &[Alert] {
        match self {
            Self::NoDateSelected => &[],
            Self::Alerts(alerts) => alerts.as_slice(),
        }
    }
}

/// Evaluates every rule against the current store contents.
pub fn evaluate(
    store: &EventStore,
    reference: Option<NaiveDate>,
    config: &RuleConfig,
) -> AlertReport {
    let Some(reference) = reference else {
        return AlertReport::NoDateSelected;
    };

    let alerts = evaluate_rules(store, reference, config);
    tracing::debug!(
        %reference,
        events = store.len(),
        alerts = alerts.len(),
        "evaluated alerts"
    );
    AlertReport::Alerts(alerts)
}
