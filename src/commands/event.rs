use anyhow::Result;
use chrono::{Duration, NaiveTime};
use clap::Args;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use pitchside_core::EventKind;
use pitchside_core::form::EventForm;
use pitchside_core::schedule::new_event_id;
use tracing::error;

use super::parse_day;
use crate::app::{self, App};
use crate::render::render_event_card;
use crate::utils::tui::value_or_prompt;

/// Event fields shared by `add` and `edit`. Anything left out keeps the
/// form's current value.
#[derive(Args, Debug, Default)]
pub struct EventArgs {
    /// Where it takes place
    #[arg(short, long)]
    pub location: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    /// Team label, e.g. "U12"
    #[arg(long)]
    pub team: Option<String>,

    /// training or match
    #[arg(short = 't', long = "type")]
    pub kind: Option<EventKind>,

    /// Day (YYYY-MM-DD, "yesterday", "today" or "tomorrow")
    #[arg(short, long)]
    pub date: Option<String>,

    /// Start time (e.g. "17:00" or "5:00 PM")
    #[arg(short, long)]
    pub start: Option<String>,

    /// End time (defaults to one hour after the start)
    #[arg(short, long)]
    pub end: Option<String>,
}

impl EventArgs {
    fn apply_to(self, form: &mut EventForm) -> Result<()> {
        if let Some(location) = self.location {
            form.location = location;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(team) = self.team {
            form.team = team;
        }
        if let Some(kind) = self.kind {
            form.kind = kind;
        }
        if let Some(date) = self.date {
            form.date = parse_day(&date)?;
        }

        match (self.start, self.end) {
            (Some(start), None) => {
                form.start = parse_time(&start)?;
                form.end = form.start + Duration::hours(1);
            }
            (start, end) => {
                if let Some(start) = start {
                    form.start = parse_time(&start)?;
                }
                if let Some(end) = end {
                    form.end = parse_time(&end)?;
                }
            }
        }

        Ok(())
    }
}

pub async fn add(title: Option<String>, fields: EventArgs) -> Result<()> {
    let app = App::start().await?;
    let user = app.user()?;
    user.ensure_can_manage_events("add events")?;

    let interactive = title.is_none();
    let now = app::now();
    let mut form = EventForm::new(now);

    form.title = value_or_prompt(title, "Title")?;
    if fields.location.is_none() && interactive {
        form.location = value_or_prompt(None, "Where?")?;
    }
    fields.apply_to(&mut form)?;

    let event = form.create(new_event_id(), now)?;

    let mut schedule = app.schedule()?;
    schedule.add(event.clone());
    if let Err(e) = app.save_schedule(&schedule) {
        error!("Failed to save new event: {:#}", e);
        anyhow::bail!("Failed to create event. Please try again.");
    }

    if interactive {
        println!();
    }
    println!("{}", format!("Created: {}", event.title).green());
    println!("{}", render_event_card(&event, true));

    Ok(())
}

pub async fn edit(id: &str, title: Option<String>, fields: EventArgs) -> Result<()> {
    let app = App::start().await?;
    let user = app.user()?;
    user.ensure_can_manage_events("edit events")?;

    let mut schedule = app.schedule()?;
    let existing = schedule.resolve(id)?.clone();

    let mut form = EventForm::for_event(&existing);
    if let Some(title) = title {
        form.title = title;
    }
    fields.apply_to(&mut form)?;

    let updated = form.apply(&existing)?;
    schedule.update(updated.clone())?;
    if let Err(e) = app.save_schedule(&schedule) {
        error!("Failed to save updated event: {:#}", e);
        anyhow::bail!("Failed to update event. Please try again.");
    }

    println!("{}", format!("Updated: {}", updated.title).green());
    println!("{}", render_event_card(&updated, true));

    Ok(())
}

pub async fn delete(id: &str, force: bool) -> Result<()> {
    let app = App::start().await?;
    let user = app.user()?;
    user.ensure_can_manage_events("delete events")?;

    let mut schedule = app.schedule()?;
    let event = schedule.resolve(id)?.clone();

    println!("{}", render_event_card(&event, true));

    if !force {
        println!();
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", event.title))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    schedule.remove(&event.id)?;
    app.save_schedule(&schedule)?;

    println!("{}", format!("Deleted: {}", event.title).red());

    Ok(())
}

/// Parse a time of day as 24-hour "HH:MM" or 12-hour "H:MM AM".
fn parse_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(&trimmed.to_uppercase(), "%I:%M %p"))
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid time '{}'. Expected e.g. \"17:00\" or \"5:00 PM\"",
                input
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn blank_form() -> EventForm {
        let now = NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        EventForm::new(now)
    }

    #[test]
    fn parses_24_and_12_hour_times() {
        assert_eq!(parse_time("17:00").unwrap(), NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert_eq!(parse_time("5:30 pm").unwrap(), NaiveTime::from_hms_opt(17, 30, 0).unwrap());
        assert!(parse_time("teatime").is_err());
    }

    #[test]
    fn start_without_end_gets_one_hour() {
        let mut form = blank_form();
        let args = EventArgs {
            start: Some("18:15".to_string()),
            ..Default::default()
        };
        args.apply_to(&mut form).unwrap();

        assert_eq!(form.start, NaiveTime::from_hms_opt(18, 15, 0).unwrap());
        assert_eq!(form.end, NaiveTime::from_hms_opt(19, 15, 0).unwrap());
    }

    #[test]
    fn end_before_start_is_left_for_validation() {
        let mut form = blank_form();
        form.title = "Training".to_string();
        form.location = "Pitch 2".to_string();
        let args = EventArgs {
            start: Some("18:00".to_string()),
            end: Some("17:00".to_string()),
            kind: Some(EventKind::Match),
            ..Default::default()
        };
        args.apply_to(&mut form).unwrap();

        assert_eq!(form.kind, EventKind::Match);
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "End time must be after start time"
        );
    }
}
