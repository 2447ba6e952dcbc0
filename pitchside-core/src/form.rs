//! Form validation for the add/edit event, login and registration flows.
//!
//! Each `FormError` displays as the exact message shown to the user.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

use crate::constants::DEFAULT_TEAM;
use crate::event::{Event, EventKind};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingRequired,

    #[error("End time must be after start time")]
    EndNotAfterStart,

    #[error("Please enter both email and password")]
    MissingCredentials,

    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Fields of the add/edit event form.
///
/// Start and end are times of day on `date`; only hours and minutes count.
#[derive(Debug, Clone, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub team: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl EventForm {
    /// Blank form: training for all teams, today, starting now for one hour.
    pub fn new(now: NaiveDateTime) -> Self {
        EventForm {
            title: String::new(),
            description: String::new(),
            location: String::new(),
            team: DEFAULT_TEAM.to_string(),
            kind: EventKind::Training,
            date: now.date(),
            start: now.time(),
            end: now.time() + Duration::hours(1),
        }
    }

    /// Form pre-filled for editing `event`.
    pub fn for_event(event: &Event) -> Self {
        EventForm {
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            location: event.location.clone(),
            team: event.team.clone().unwrap_or_default(),
            kind: event.kind,
            date: event.start_time.date(),
            start: event.start_time.time(),
            end: event.end_time.time(),
        }
    }

    /// Start and end timestamps, or the first problem with the form.
    /// Required fields are checked before times.
    pub fn validate(&self) -> Result<(NaiveDateTime, NaiveDateTime), FormError> {
        if self.title.trim().is_empty() || self.location.trim().is_empty() {
            return Err(FormError::MissingRequired);
        }
        self.time_window()
    }

    /// Combine `date` with the start and end times of day.
    pub fn time_window(&self) -> Result<(NaiveDateTime, NaiveDateTime), FormError> {
        let start = self.date.and_time(truncate_to_minute(self.start));
        let end = self.date.and_time(truncate_to_minute(self.end));

        if end <= start {
            return Err(FormError::EndNotAfterStart);
        }
        Ok((start, end))
    }

    /// Build a new event from the form.
    pub fn create(&self, id: String, now: NaiveDateTime) -> Result<Event, FormError> {
        let (start_time, end_time) = self.validate()?;

        Ok(Event {
            id,
            title: self.title.trim().to_string(),
            description: non_empty(&self.description),
            location: self.location.trim().to_string(),
            team: non_empty(&self.team),
            kind: self.kind,
            start_time,
            end_time,
            created_at: Some(now),
        })
    }

    /// `event` with every editable field replaced from the form.
    /// Id and creation time are kept.
    pub fn apply(&self, event: &Event) -> Result<Event, FormError> {
        let (start_time, end_time) = self.validate()?;

        Ok(Event {
            id: event.id.clone(),
            title: self.title.trim().to_string(),
            description: non_empty(&self.description),
            location: self.location.trim().to_string(),
            team: non_empty(&self.team),
            kind: self.kind,
            start_time,
            end_time,
            created_at: event.created_at,
        })
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), FormError> {
    if email.is_empty() || password.is_empty() {
        return Err(FormError::MissingCredentials);
    }
    Ok(())
}

pub fn validate_registration(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Result<(), FormError> {
    if [name, email, password, confirm_password]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(FormError::MissingFields);
    }
    if password != confirm_password {
        return Err(FormError::PasswordMismatch);
    }
    Ok(())
}

fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
