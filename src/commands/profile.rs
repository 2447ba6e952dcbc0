use anyhow::Result;
use owo_colors::OwoColorize;
use pitchside_core::stats::ProfileStats;

use crate::app::{self, App};
use crate::render::Render;

pub async fn run() -> Result<()> {
    let app = App::start().await?;
    let user = app.user()?;
    let schedule = app.schedule()?;

    println!("{}", user.render());
    println!();
    println!("{}", "Activity".bold());
    println!("{}", ProfileStats::from_schedule(&schedule, app::now()).render());
    println!();
    println!("Sign out with {}", "pitchside logout".cyan());

    Ok(())
}
