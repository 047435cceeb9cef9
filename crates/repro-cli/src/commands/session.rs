//! Session command: drives one reproduction-control session line by line.
//!
//! Each line is one user action on the screen. The session starts empty and
//! is dropped when input ends.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use repro_core::{EventId, EventType, ReproductionSession, SessionError, format_date};

use super::util::parse_reference_date;
use crate::Config;
use crate::render::{write_alert_panel, write_event_list, write_timeline};

/// Guidance shown when an action needs a selected day.
const SELECT_DATE_FIRST: &str = "Select a date first: choose a day on the calendar.";

/// A single parsed session action.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Select(NaiveDate),
    Register(EventType),
    Delete(EventId),
    Events,
    Alerts,
    List,
}

/// Parses one input line. Blank lines and `#` comments yield `None`.
fn parse_action(line: &str, today: NaiveDate) -> Result<Option<Action>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let action = match (command, arg) {
        ("select", arg) if !arg.is_empty() => Action::Select(parse_reference_date(arg, today)?),
        ("register", arg) if !arg.is_empty() => Action::Register(arg.parse()?),
        ("delete", arg) if !arg.is_empty() => Action::Delete(
            arg.parse()
                .with_context(|| format!("invalid event id {arg:?}"))?,
        ),
        ("events", "") => Action::Events,
        ("alerts", "") => Action::Alerts,
        ("list", "") => Action::List,
        _ => bail!("unknown command {line:?}"),
    };
    Ok(Some(action))
}

/// Applies one action to the session and writes its result.
fn apply<W: Write>(
    session: &mut ReproductionSession,
    action: Action,
    writer: &mut W,
) -> Result<()> {
    match action {
        Action::Select(date) => {
            session.select_date(date);
            writeln!(writer, "Selected {}", format_date(date))?;
        }
        Action::Register(event_type) => match session.register_event(event_type) {
            Ok(event) => writeln!(
                writer,
                "Event added: {} on {} (id {})",
                event.description(),
                format_date(event.date),
                event.id
            )?,
            Err(SessionError::NoDateSelected) => writeln!(writer, "{SELECT_DATE_FIRST}")?,
        },
        Action::Delete(id) => {
            if session.delete_event(id) {
                writeln!(writer, "Deleted event {id}")?;
            } else {
                writeln!(writer, "No event {id} (nothing to delete)")?;
            }
        }
        Action::Events => {
            let events = session.events_for_selected_day().unwrap_or_default();
            write_timeline(writer, session.selected_date(), &events)?;
        }
        Action::Alerts => {
            let report = session.alerts();
            write_alert_panel(writer, &report)?;
        }
        Action::List => write_event_list(writer, session.store().iter())?,
    }
    Ok(())
}

/// Runs a session over `input`, writing the result of every action.
pub fn run<R: BufRead, W: Write>(
    input: R,
    writer: &mut W,
    config: &Config,
    today: NaiveDate,
) -> Result<()> {
    let mut session = ReproductionSession::new(config.rules.clone());

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        let Some(action) =
            parse_action(&line, today).with_context(|| format!("line {line_no}"))?
        else {
            continue;
        };
        tracing::debug!(line_no, ?action, "session action");
        apply(&mut session, action, writer)?;
    }

    tracing::debug!(events = session.store().len(), "session ended");
    Ok(())
}
