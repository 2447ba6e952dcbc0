//! Profile statistics derived from the schedule.

use chrono::NaiveDateTime;

use crate::event::EventKind;
use crate::schedule::Schedule;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileStats {
    pub trainings: usize,
    pub matches: usize,
    /// Hours across all finished events
    pub hours: f64,
}

impl ProfileStats {
    /// Count events that had finished by `now`.
    pub fn from_schedule(schedule: &Schedule, now: NaiveDateTime) -> Self {
        let mut stats = ProfileStats::default();
        let mut minutes = 0i64;

        for event in schedule.events().iter().filter(|e| e.end_time <= now) {
            match event.kind {
                EventKind::Training => stats.trainings += 1,
                EventKind::Match => stats.matches += 1,
            }
            minutes += event.duration().num_minutes();
        }

        stats.hours = minutes as f64 / 60.0;
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Event;
    use chrono::{Duration, NaiveDate};

    fn event(id: &str, kind: EventKind, day: u32, minutes: i64) -> Event {
        let start = NaiveDate::from_ymd_opt(2025, 3, day)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        Event {
            id: id.to_string(),
            title: id.to_string(),
            description: None,
            location: "Pitch".to_string(),
            team: None,
            kind,
            start_time: start,
            end_time: start + Duration::minutes(minutes),
            created_at: None,
        }
    }

    #[test]
    fn counts_only_finished_events() {
        let schedule = Schedule::new(vec![
            event("t1", EventKind::Training, 1, 90),
            event("t2", EventKind::Training, 3, 60),
            event("m1", EventKind::Match, 2, 120),
            event("future", EventKind::Match, 30, 120),
        ]);
        let now = NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();

        let stats = ProfileStats::from_schedule(&schedule, now);

        assert_eq!(stats.trainings, 2);
        assert_eq!(stats.matches, 1);
        assert!((stats.hours - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_schedule_has_zero_stats() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(
            ProfileStats::from_schedule(&Schedule::default(), now),
            ProfileStats::default()
        );
    }
}
