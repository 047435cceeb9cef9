//! Shared utilities for CLI commands.

use std::sync::LazyLock;

use anyhow::Context;
use chrono::NaiveDate;
use regex::Regex;
use repro_core::{add_days, parse_date};

/// Pre-compiled regex for relative date parsing.
static RELATIVE_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(day|week)s?\s+ago$").unwrap());

/// Conservative bound for relative dates (~1000 years in days).
const MAX_RELATIVE_DAYS: i64 = 1000 * 366;

/// Parse a date argument as either canonical or relative to `today`.
///
/// Supports:
/// - Canonical: "2024-01-05"
/// - Named: "today", "yesterday"
/// - Relative: "3 days ago", "1 week ago"
pub fn parse_reference_date(s: &str, today: NaiveDate) -> anyhow::Result<NaiveDate> {
    let s = s.trim();
    match s {
        "today" => return Ok(today),
        "yesterday" => return Ok(add_days(today, -1)),
        _ => {}
    }

    let Some(caps) = RELATIVE_DATE_RE.captures(s) else {
        return parse_date(s).with_context(|| {
            format!("invalid date {s:?}, use YYYY-MM-DD, 'today' or relative (e.g. '3 days ago')")
        });
    };

    let n: i64 = caps[1]
        .parse()
        .context("failed to parse number in relative date")?;

    let days_per_unit = match &caps[2] {
        "day" => 1,
        "week" => 7,
        unit => anyhow::bail!("Unknown date unit: {unit}"),
    };

    if n > MAX_RELATIVE_DAYS / days_per_unit {
        anyhow::bail!("Relative date too far back: {n} {}s", &caps[2]);
    }

    Ok(add_days(today, -(n * days_per_unit)))
}
