//! Schedule command: key dates that follow from a single event.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use repro_core::{EventType, GestationWindow, MatingWindow, RuleConfig, add_days, format_date};

/// Writes the follow-up dates for an event of `event_type` on `date`.
pub fn run<W: Write>(
    writer: &mut W,
    event_type: EventType,
    date: NaiveDate,
    rules: &RuleConfig,
) -> Result<()> {
    let label = match event_type {
        EventType::Heat => "Heat",
        EventType::Mating => "Mating",
        EventType::Birth => "Birth",
    };
    writeln!(writer, "{label} on {}", format_date(date))?;

    match event_type {
        EventType::Heat => {
            let window = MatingWindow::after_heat(date, rules);
            writeln!(
                writer,
                "  Mating window:      {} to {}",
                format_date(window.heat),
                format_date(window.end)
            )?;
            writeln!(
                writer,
                "  Missed-mating alert from {}",
                format_date(add_days(window.end, 1))
            )?;
        }
        EventType::Mating => {
            let gestation = GestationWindow::after_mating(date, rules);
            writeln!(writer, "  Expected birth:     {}", format_date(gestation.expected))?;
            writeln!(writer, "  Reminder from:      {}", format_date(gestation.reminder_from))?;
            writeln!(writer, "  Birth counts from:  {}", format_date(gestation.association_from))?;
            writeln!(writer, "  Overdue after:      {}", format_date(gestation.overdue_after))?;
        }
        EventType::Birth => writeln!(writer, "  No follow-up dates.")?,
    }

    Ok(())
}
