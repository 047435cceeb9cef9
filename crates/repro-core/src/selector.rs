//! Selection of the most recent event up to a boundary date.

use chrono::NaiveDate;

use crate::event::Event;

/// Returns the event with the latest date among those on or before
/// `boundary`.
///
/// Ties keep the first event encountered: the fold only replaces its
/// current best on a strictly later date.
pub fn latest_at_or_before<'a, I>(events: I, boundary: NaiveDate) -> Option<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|e| e.date <= boundary)
        .fold(None, |best: Option<&Event>, e| match best {
            Some(b) if e.date <= b.date => Some(b),
            _ => Some(e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_date;
    use crate::event::EventId;
    use crate::event_type::EventType;

    fn heat(id: u64, date: &str) -> Event {
        Event::new(EventId::new(id), EventType::Heat, parse_date(date).unwrap())
    }

    #[test]
    fn empty_input_selects_nothing() {
        let events: Vec<Event> = Vec::new();
        assert!(latest_at_or_before(&events, parse_date("2024-01-01").unwrap()).is_none());
    }

    #[test]
    fn ignores_events_after_boundary() {
        let events = vec![heat(1, "2024-01-01"), heat(2, "2024-01-10")];
        let latest = latest_at_or_before(&events, parse_date("2024-01-05").unwrap());
        assert_eq!(latest.map(|e| e.id), Some(EventId::new(1)));
    }

    #[test]
    fn boundary_is_inclusive() {
        let events = vec![heat(1, "2024-01-01"), heat(2, "2024-01-05")];
        let latest = latest_at_or_before(&events, parse_date("2024-01-05").unwrap());
        assert_eq!(latest.map(|e| e.id), Some(EventId::new(2)));
    }

    #[test]
    fn picks_latest_regardless_of_position() {
        let events = vec![heat(1, "2024-01-04"), heat(2, "2024-01-01"), heat(3, "2024-01-03")];
        let latest = latest_at_or_before(&events, parse_date("2024-02-01").unwrap());
        assert_eq!(latest.map(|e| e.id), Some(EventId::new(1)));
    }

    #[test]
    fn ties_keep_first_encountered() {
        let events = vec![
            heat(1, "2024-01-01"),
            heat(2, "2024-01-03"),
            heat(3, "2024-01-03"),
            heat(4, "2024-01-03"),
        ];
        let latest = latest_at_or_before(&events, parse_date("2024-01-05").unwrap());
        assert_eq!(latest.map(|e| e.id), Some(EventId::new(2)));
    }

    #[test]
    fn all_after_boundary_selects_nothing() {
        let events = vec![heat(1, "2024-02-01")];
        assert!(latest_at_or_before(&events, parse_date("2024-01-31").unwrap()).is_none());
    }
}
