//! The list of events and the queries the calendar and home views need.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{EVENTS_KEY, WEEK_STRIP_RADIUS};
use crate::error::{PitchsideError, PitchsideResult};
use crate::event::{Event, EventKind};
use crate::storage::{self, Storage};

/// Events in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    events: Vec<Event>,
}

/// Which event types the calendar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    Only(EventKind),
}

/// One day of the week strip above the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub event_count: usize,
}

pub fn new_event_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Schedule {
    pub fn new(events: Vec<Event>) -> Self {
        Schedule { events }
    }

    pub fn load<S: Storage + ?Sized>(storage: &S) -> PitchsideResult<Self> {
        let schedule: Option<Schedule> = storage::load_json(storage, EVENTS_KEY)?;
        Ok(schedule.unwrap_or_default())
    }

    pub fn save<S: Storage + ?Sized>(&self, storage: &S) -> PitchsideResult<()> {
        storage::save_json(storage, EVENTS_KEY, self)?;
        debug!(count = self.events.len(), "saved schedule");
        Ok(())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Look up by full id or by a prefix that only one event has.
    pub fn resolve(&self, id_or_prefix: &str) -> PitchsideResult<&Event> {
        if let Some(event) = self.get(id_or_prefix) {
            return Ok(event);
        }

        let mut matches = self
            .events
            .iter()
            .filter(|e| !id_or_prefix.is_empty() && e.id.starts_with(id_or_prefix));

        match (matches.next(), matches.next()) {
            (Some(event), None) => Ok(event),
            (Some(_), Some(_)) => {
                Err(PitchsideError::AmbiguousEventId(id_or_prefix.to_string()))
            }
            _ => Err(PitchsideError::EventNotFound(id_or_prefix.to_string())),
        }
    }

    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Replace the event with the same id.
    pub fn update(&mut self, event: Event) -> PitchsideResult<()> {
        let slot = self
            .events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| PitchsideError::EventNotFound(event.id.clone()))?;
        *slot = event;
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> PitchsideResult<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| PitchsideError::EventNotFound(id.to_string()))?;
        Ok(self.events.remove(index))
    }

    pub fn filtered(&self, filter: EventFilter) -> Vec<&Event> {
        self.events.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Events starting on `date`, earliest first.
    pub fn on_date(&self, date: NaiveDate, filter: EventFilter) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.starts_on(date) && filter.matches(e))
            .collect();
        events.sort_by_key(|e| e.start_time);
        events
    }

    /// The next `limit` events starting at or after `now`.
    pub fn upcoming(&self, now: NaiveDateTime, limit: usize) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.start_time >= now).collect();
        events.sort_by_key(|e| e.start_time);
        events.truncate(limit);
        events
    }

    /// Seven days centred on `today`.
    pub fn week_strip(&self, today: NaiveDate, selected: NaiveDate) -> Vec<DayCell> {
        (-WEEK_STRIP_RADIUS..=WEEK_STRIP_RADIUS)
            .map(|offset| {
                let date = today + Duration::days(offset);
                DayCell {
                    date,
                    is_today: offset == 0,
                    is_selected: date == selected,
                    event_count: self.events.iter().filter(|e| e.starts_on(date)).count(),
                }
            })
            .collect()
    }
}

impl EventFilter {
    /// all -> training -> match -> all
    pub fn next(self) -> Self {
        match self {
            EventFilter::All => EventFilter::Only(EventKind::Training),
            EventFilter::Only(EventKind::Training) => EventFilter::Only(EventKind::Match),
            EventFilter::Only(EventKind::Match) => EventFilter::All,
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Only(kind) => event.kind == *kind,
        }
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventFilter::All => write!(f, "All"),
            EventFilter::Only(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for EventFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(EventFilter::All);
        }
        s.parse::<EventKind>().map(EventFilter::Only)
    }
}
