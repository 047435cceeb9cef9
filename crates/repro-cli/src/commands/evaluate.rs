//! Evaluate command: timeline and alerts for a date from a JSONL event file.
//!
//! The file is the hand-off from whatever persists events; this command only
//! reads it.

use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use repro_core::{Alert, Event, EventId, EventStore, EventType, ReproductionSession, format_date};
use serde::Serialize;

use crate::Config;
use crate::render::{write_alert_panel, write_timeline};

/// Event as shown in JSON output.
#[derive(Debug, Serialize)]
struct EventEntry {
    id: EventId,
    date: String,
    #[serde(rename = "type")]
    event_type: EventType,
    description: &'static str,
}

impl From<&Event> for EventEntry {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            date: format_date(event.date),
            event_type: event.event_type,
            description: event.description(),
        }
    }
}

/// Alert as shown in JSON output.
#[derive(Debug, Serialize)]
struct AlertEntry {
    #[serde(flatten)]
    alert: Alert,
    message: String,
}

#[derive(Debug, Serialize)]
struct EvaluationOutput {
    date: String,
    events: Vec<EventEntry>,
    alerts: Vec<AlertEntry>,
}

/// Reads events from JSONL, one event per line. Blank lines are skipped.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let event: Event = serde_json::from_str(&line)
            .with_context(|| format!("invalid event on line {line_no}"))?;
        events.push(event);
    }
    Ok(events)
}

/// Writes the evaluation of `store` at `date` as text panels or JSON.
pub fn write_evaluation<W: Write>(
    writer: &mut W,
    store: EventStore,
    date: NaiveDate,
    config: &Config,
    json: bool,
) -> Result<()> {
    let mut session = ReproductionSession::with_store(store, config.rules.clone());
    session.select_date(date);
    let report = session.alerts();
    let events = session.events_for_selected_day()?;

    if json {
        let output = EvaluationOutput {
            date: format_date(date),
            events: events.iter().map(|e| EventEntry::from(*e)).collect(),
            alerts: report
                .alerts()
                .iter()
                .map(|alert| AlertEntry {
                    alert: alert.clone(),
                    message: alert.to_string(),
                })
                .collect(),
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(writer, "Date: {}", format_date(date))?;
        write_timeline(writer, Some(date), &events)?;
        write_alert_panel(writer, &report)?;
    }
    Ok(())
}

/// Runs the evaluate command.
pub fn run<W: Write>(
    writer: &mut W,
    events_path: &Path,
    date: NaiveDate,
    config: &Config,
    json: bool,
) -> Result<()> {
    let file = std::fs::File::open(events_path)
        .with_context(|| format!("failed to open {}", events_path.display()))?;
    let events = read_events(BufReader::new(file))
        .with_context(|| format!("failed to read {}", events_path.display()))?;
    let store = EventStore::from_events(events)
        .with_context(|| format!("invalid event set in {}", events_path.display()))?;
    tracing::debug!(events = store.len(), %date, "evaluating");

    write_evaluation(writer, store, date, config, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use repro_core::parse_date;

    const EVENTS: &str = r#"{"id":1,"date":"2024-01-01","type":"mating"}

{"id":2,"date":"2024-04-20","type":"heat"}
"#;

    fn evaluate(date: &str, json: bool) -> String {
        let events = read_events(EVENTS.as_bytes()).unwrap();
        let store = EventStore::from_events(events).unwrap();
        let mut output = Vec::new();
        write_evaluation(
            &mut output,
            store,
            parse_date(date).unwrap(),
            &Config::default(),
            json,
        )
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn reads_jsonl_skipping_blank_lines() {
        let events = read_events(EVENTS.as_bytes()).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].event_type, EventType::Heat);
    }

    #[test]
    fn read_events_names_bad_line() {
        let input = "{\"id\":1,\"date\":\"2024-01-01\",\"type\":\"heat\"}\nnot json\n";
        let err = read_events(input.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "invalid event on line 2");
    }

    #[test]
    fn text_output_shows_panels() {
        let output = evaluate("2024-04-20", false);
        assert_snapshot!(output, @r"
        Date: 2024-04-20
        Timeline
          2024-04-20  Heat detected  [id 2]
        Alert check
          • Birth expected around 2024-04-24 (prepare pens/attention)
        ");
    }

    #[test]
    fn json_output_lists_events_and_alerts() {
        let output = evaluate("2024-04-29", true);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["date"], "2024-04-29");
        assert_eq!(value["events"].as_array().unwrap().len(), 0);

        let alerts = value["alerts"].as_array().unwrap();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0]["kind"], "missed_mating");
        assert_eq!(alerts[0]["heat_date"], "2024-04-20");
        assert_eq!(alerts[1]["kind"], "birth_overdue");
        assert_eq!(
            alerts[1]["message"],
            "Birth overdue since ~2024-04-24 and no birth recorded. Verify animal status."
        );
    }
}
