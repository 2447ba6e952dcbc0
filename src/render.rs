//! Terminal rendering for pitchside-core types.
//!
//! Extension traits that add colored output to core types using owo_colors.

use chrono::{NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;
use pitchside_core::config::Preferences;
use pitchside_core::schedule::DayCell;
use pitchside_core::stats::ProfileStats;
use pitchside_core::{Event, EventKind, User};

pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventKind {
    fn render(&self) -> String {
        let badge = format!("[{}]", self.label());
        match self {
            EventKind::Training => badge.green().to_string(),
            EventKind::Match => badge.yellow().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let mut lines = vec![format!("{} {}", self.kind.render(), self.title.bold())];

        lines.push(format!(
            "   {}  {} - {}",
            format_date(self.start_time.date()),
            format_time(self.start_time),
            format_time(self.end_time)
        ));

        let place = match &self.team {
            Some(team) => format!("{} · {}", self.location, team),
            None => self.location.clone(),
        };
        lines.push(format!("   {}", place));

        if let Some(desc) = &self.description {
            lines.push(format!("   {}", desc.dimmed()));
        }

        lines.join("\n")
    }
}

/// An event card, with its short id when the viewer can edit it.
pub fn render_event_card(event: &Event, editable: bool) -> String {
    let card = event.render();
    if editable {
        format!("{}\n   {}", card, format!("id: {}", short_id(&event.id)).dimmed())
    } else {
        card
    }
}

impl Render for DayCell {
    fn render(&self) -> String {
        let label = format!("{} {}", self.date.format("%a"), self.date.format("%-d"));
        let label = if self.event_count > 0 {
            format!("{}•", label)
        } else {
            format!("{} ", label)
        };

        if self.is_selected {
            label.reversed().to_string()
        } else if self.is_today {
            label.bold().to_string()
        } else {
            label.dimmed().to_string()
        }
    }
}

impl Render for User {
    fn render(&self) -> String {
        format!(
            "{}\n   {}\n   {}",
            self.name.bold(),
            self.email,
            capitalize(self.role.as_str()).dimmed()
        )
    }
}

impl Render for ProfileStats {
    fn render(&self) -> String {
        format!(
            "   Trainings   {}\n   Matches     {}\n   Hours       {:.1}",
            self.trainings, self.matches, self.hours
        )
    }
}

impl Render for Preferences {
    fn render(&self) -> String {
        self.entries()
            .into_iter()
            .map(|(key, value)| {
                let value = match value.as_str() {
                    "true" => "on".green().to_string(),
                    "false" => "off".dimmed().to_string(),
                    _ => value,
                };
                format!("   {:<20}{}", key, value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// "Thu, Mar 20"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// "March 20, 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "05:00 PM"
pub fn format_time(dt: NaiveDateTime) -> String {
    dt.format("%I:%M %p").to_string()
}

/// First 8 characters of an event id, enough to address it from the CLI.
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 20)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn dates_and_times_match_card_format() {
        assert_eq!(format_date(dt(17, 0).date()), "Thu, Mar 20");
        assert_eq!(format_long_date(dt(17, 0).date()), "March 20, 2025");
        assert_eq!(format_time(dt(17, 5)), "05:05 PM");
        assert_eq!(format_time(dt(9, 30)), "09:30 AM");
    }

    #[test]
    fn short_id_truncates_long_ids_only() {
        assert_eq!(short_id("0f8fad5b-d9cb-469f-a165-70867728950e"), "0f8fad5b");
        assert_eq!(short_id("42"), "42");
    }

    #[test]
    fn capitalize_role_names() {
        assert_eq!(capitalize("coach"), "Coach");
        assert_eq!(capitalize(""), "");
    }
}
