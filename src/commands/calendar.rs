use anyhow::Result;
use chrono::Local;
use owo_colors::OwoColorize;
use pitchside_core::schedule::EventFilter;

use super::parse_day;
use crate::app::App;
use crate::render::{Render, format_long_date, render_event_card};

pub async fn run(date: Option<String>, filter: EventFilter) -> Result<()> {
    let app = App::start().await?;
    let user = app.user()?;
    let schedule = app.schedule()?;

    let today = Local::now().date_naive();
    let selected = match date {
        Some(d) => parse_day(&d)?,
        None => today,
    };

    let strip: Vec<String> = schedule
        .week_strip(today, selected)
        .iter()
        .map(|day| day.render())
        .collect();
    println!("{}", strip.join("  "));
    println!();

    println!(
        "{}  {}",
        format_long_date(selected).bold(),
        format!("({})", filter).dimmed()
    );

    let events = schedule.on_date(selected, filter);
    if events.is_empty() {
        println!("   {}", "No events scheduled for this day".dimmed());
        if user.role.can_manage_events() {
            println!("   Add one with {}", "pitchside add".cyan());
        }
        return Ok(());
    }

    let editable = user.role.can_manage_events();
    for event in events {
        println!();
        println!("{}", render_event_card(event, editable));
    }

    Ok(())
}
