//! Scheduled trainings and matches.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A training session or match.
///
/// Times are local wall-clock times; `end_time` is always after `start_time`
/// for events built through `EventForm`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Training,
    Match,
}

impl EventKind {
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Training => "Training",
            EventKind::Match => "Match",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EventKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "training" => Ok(EventKind::Training),
            "match" => Ok(EventKind::Match),
            other => Err(format!(
                "Unknown event type '{}'. Expected 'training' or 'match'",
                other
            )),
        }
    }
}

impl Event {
    pub fn date(&self) -> NaiveDate {
        self.start_time.date()
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }

    pub fn starts_on(&self, date: NaiveDate) -> bool {
        self.date() == date
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_and_type_field() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(17, 0, 0)
            .unwrap();
        let event = Event {
            id: "1".to_string(),
            title: "U12 Training".to_string(),
            description: None,
            location: "Main Pitch".to_string(),
            team: Some("U12".to_string()),
            kind: EventKind::Training,
            start_time: start,
            end_time: start + chrono::Duration::minutes(90),
            created_at: None,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "training");
        assert_eq!(json["startTime"], "2025-03-20T17:00:00");
        assert_eq!(json["endTime"], "2025-03-20T18:30:00");
        assert!(json.get("description").is_none());

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
        assert_eq!(back.duration(), chrono::Duration::minutes(90));
    }

    #[test]
    fn kind_parses_from_cli_strings() {
        assert_eq!("Match".parse::<EventKind>().unwrap(), EventKind::Match);
        assert!("friendly".parse::<EventKind>().is_err());
    }
}
