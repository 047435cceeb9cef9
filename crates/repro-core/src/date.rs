//! Calendar-date parsing and day arithmetic.
//!
//! Dates are plain `(year, month, day)` triples backed by [`NaiveDate`].
//! Nothing here goes through an instant or a timezone, so a day can never
//! drift across a UTC boundary.

use std::sync::LazyLock;

use chrono::{Days, NaiveDate};
use regex::Regex;
use thiserror::Error;

/// Canonical `YYYY-MM-DD` shape. ASCII digits only.
static CANONICAL_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap());

/// Errors from parsing a calendar date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    /// The text is not in `YYYY-MM-DD` form.
    #[error("malformed date `{input}`, expected YYYY-MM-DD")]
    Malformed { input: String },

    /// The components do not name a real calendar day.
    #[error("date `{input}` does not exist in the calendar")]
    OutOfRange { input: String },
}

/// Parses a canonical `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    let malformed = || DateError::Malformed {
        input: s.to_string(),
    };

    let caps = CANONICAL_DATE_RE.captures(s).ok_or_else(malformed)?;
    let year: i32 = caps[1].parse().map_err(|_| malformed())?;
    let month: u32 = caps[2].parse().map_err(|_| malformed())?;
    let day: u32 = caps[3].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| DateError::OutOfRange {
        input: s.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns the date `n` days after `date`; `n` may be negative.
///
/// Saturates at the edges of the representable calendar.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    let days = Days::new(n.unsigned_abs());
    if n >= 0 {
        date.checked_add_days(days).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(days).unwrap_or(NaiveDate::MIN)
    }
}

/// Signed number of days from `a` to `b`, positive when `b` is later.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    b.signed_duration_since(a).num_days()
}

/// Serde adapter that reads and writes dates through [`parse_date`] and
/// [`format_date`], so serialized events carry only canonical dates.
pub mod canonical {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_date(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_date(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn parses_components_without_shifting() {
        let date = d("2024-01-01");
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(format_date(date), "2024-01-01");
    }

    #[test]
    fn parse_rejects_non_canonical_shapes() {
        for input in [
            "2024-1-01",
            "24-01-01",
            "2024/01/01",
            "2024-01-01T00:00:00Z",
            "",
            " 2024-01-01",
        ] {
            assert!(
                matches!(parse_date(input), Err(DateError::Malformed { .. })),
                "{input:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_rejects_impossible_days() {
        assert_eq!(
            parse_date("2023-02-29"),
            Err(DateError::OutOfRange {
                input: "2023-02-29".to_string()
            })
        );
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("2024-02-29").is_ok());
    }

    #[test]
    fn add_days_crosses_month_and_year_boundaries() {
        assert_eq!(add_days(d("2024-01-01"), 114), d("2024-04-24"));
        assert_eq!(add_days(d("2023-12-30"), 3), d("2024-01-02"));
        assert_eq!(add_days(d("2024-03-01"), -1), d("2024-02-29"));
        assert_eq!(add_days(d("2024-04-24"), -7), d("2024-04-17"));
    }

    #[test]
    fn add_days_saturates() {
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MIN, -1), NaiveDate::MIN);
    }

    #[test]
    fn days_between_same_day_is_zero() {
        for s in ["2024-02-29", "1999-12-31", "2000-01-01"] {
            assert_eq!(days_between(d(s), d(s)), 0);
        }
    }

    #[test]
    fn days_between_inverts_add_days() {
        for s in ["2024-02-28", "2023-12-31", "2000-02-29", "1999-03-01"] {
            let start = d(s);
            for n in -800..=800 {
                assert_eq!(days_between(start, add_days(start, n)), n, "{s} + {n}");
            }
        }
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(d("2024-04-24"), d("2024-04-20")), -4);
        assert_eq!(days_between(d("2024-04-24"), d("2024-04-29")), 5);
    }
}
