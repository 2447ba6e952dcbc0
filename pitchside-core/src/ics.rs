//! iCalendar export of the schedule.

use icalendar::{Calendar, Component, EventLike};

use crate::event::{Event, EventKind};

/// Render `events` as a single VCALENDAR with one VEVENT each.
///
/// Times are written as floating local times (no `Z`, no `TZID`).
pub fn export_ics(events: &[Event]) -> String {
    let mut cal = Calendar::new();
    cal.name("Pitchside");

    for event in events {
        cal.push(to_ics_event(event));
    }

    strip_ics_bloat(&cal.done().to_string())
}

fn to_ics_event(event: &Event) -> icalendar::Event {
    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&event.id);
    ics_event.summary(&event.title);
    ics_event.location(&event.location);

    ics_event.add_property("DTSTART", floating(event.start_time));
    ics_event.add_property("DTEND", floating(event.end_time));

    if let Some(ref desc) = event.description {
        ics_event.description(desc);
    }

    let category = match event.kind {
        EventKind::Training => "TRAINING",
        EventKind::Match => "MATCH",
    };
    ics_event.add_property("CATEGORIES", category);

    if let Some(ref team) = event.team {
        ics_event.add_property("X-PITCHSIDE-TEAM", team);
    }

    ics_event.done()
}

fn floating(dt: chrono::NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Replace the library PRODID and drop CALSCALE:GREGORIAN (the default).
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:PITCHSIDE\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
