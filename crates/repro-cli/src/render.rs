//! Text panels for the timeline and the alert check.

use std::io::{self, Write};

use chrono::NaiveDate;
use repro_core::{AlertReport, Event, format_date};

/// Writes the timeline panel for the selected day.
pub fn write_timeline<W: Write>(
    writer: &mut W,
    selected: Option<NaiveDate>,
    events: &[&Event],
) -> io::Result<()> {
    writeln!(writer, "Timeline")?;
    if selected.is_none() {
        writeln!(writer, "  Select a day on the calendar")?;
    } else if events.is_empty() {
        writeln!(writer, "  No information")?;
    } else {
        for event in events {
            write_event_row(writer, event)?;
        }
    }
    Ok(())
}

/// Writes every event in the store, in insertion order.
pub fn write_event_list<'a, W: Write>(
    writer: &mut W,
    events: impl IntoIterator<Item = &'a Event>,
) -> io::Result<()> {
    writeln!(writer, "All events")?;
    let mut any = false;
    for event in events {
        any = true;
        write_event_row(writer, event)?;
    }
    if !any {
        writeln!(writer, "  No events recorded")?;
    }
    Ok(())
}

/// Writes the alert panel.
pub fn write_alert_panel<W: Write>(writer: &mut W, report: &AlertReport) -> io::Result<()> {
    writeln!(writer, "Alert check")?;
    match report {
        AlertReport::NoDateSelected => writeln!(writer, "  Select a day to see alerts.")?,
        AlertReport::Alerts(alerts) if alerts.is_empty() => {
            writeln!(writer, "  No alerts for this date.")?;
        }
        AlertReport::Alerts(alerts) => {
            for alert in alerts {
                writeln!(writer, "  \u{2022} {alert}")?;
            }
        }
    }
    Ok(())
}

fn write_event_row<W: Write>(writer: &mut W, event: &Event) -> io::Result<()> {
    writeln!(
        writer,
        "  {}  {}  [id {}]",
        format_date(event.date),
        event.description(),
        event.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use repro_core::{Alert, EventId, EventType, parse_date};

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn timeline_without_selection_asks_for_a_day() {
        let output = render(|w| write_timeline(w, None, &[]));
        assert_eq!(output, "Timeline\n  Select a day on the calendar\n");
    }

    #[test]
    fn timeline_lists_events_of_the_day() {
        let date = parse_date("2024-01-01").unwrap();
        let heat = Event::new(EventId::new(1), EventType::Heat, date);
        let mating = Event::new(EventId::new(3), EventType::Mating, date);

        let output = render(|w| write_timeline(w, Some(date), &[&heat, &mating]));
        assert_snapshot!(output, @r"
        Timeline
          2024-01-01  Heat detected  [id 1]
          2024-01-01  Mating recorded  [id 3]
        ");
    }

    #[test]
    fn empty_day_has_no_information() {
        let date = parse_date("2024-01-01").unwrap();
        let output = render(|w| write_timeline(w, Some(date), &[]));
        assert_eq!(output, "Timeline\n  No information\n");
    }

    #[test]
    fn alert_panel_states() {
        let none = render(|w| write_alert_panel(w, &AlertReport::NoDateSelected));
        assert_eq!(none, "Alert check\n  Select a day to see alerts.\n");

        let empty = render(|w| write_alert_panel(w, &AlertReport::Alerts(Vec::new())));
        assert_eq!(empty, "Alert check\n  No alerts for this date.\n");

        let report = AlertReport::Alerts(vec![Alert::BirthOverdue {
            expected: parse_date("2024-04-24").unwrap(),
        }]);
        let output = render(|w| write_alert_panel(w, &report));
        assert_snapshot!(output, @r"
        Alert check
          • Birth overdue since ~2024-04-24 and no birth recorded. Verify animal status.
        ");
    }

    #[test]
    fn event_list_handles_empty_store() {
        let events: Vec<Event> = Vec::new();
        let output = render(|w| write_event_list(w, &events));
        assert_eq!(output, "All events\n  No events recorded\n");
    }
}
