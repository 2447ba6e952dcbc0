use anyhow::Result;
use owo_colors::OwoColorize;
use pitchside_core::constants::UPCOMING_LIMIT;

use crate::app::{self, App};
use crate::render::render_event_card;

pub async fn run() -> Result<()> {
    let app = App::start().await?;
    let user = app.user()?;
    let schedule = app.schedule()?;

    println!("{}", format!("Hello, {}", user.name).bold());
    println!();
    println!("{}", "Upcoming Events".bold());

    let upcoming = schedule.upcoming(app::now(), UPCOMING_LIMIT);
    if upcoming.is_empty() {
        println!("   {}", "No upcoming events".dimmed());
    }
    for event in upcoming {
        println!("{}", render_event_card(event, false));
        println!();
    }

    if user.role.can_manage_events() {
        println!();
        println!("{}", "Coach Tools".bold());
        println!("   Add an event:  {}", "pitchside add".cyan());
        println!("   Full calendar: {}", "pitchside calendar".cyan());
    }

    Ok(())
}
