use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use pitchside_core::ics::export_ics;

use crate::app::App;

pub async fn run(output: Option<PathBuf>) -> Result<()> {
    let app = App::start().await?;
    app.user()?;
    let schedule = app.schedule()?;

    let ics = export_ics(schedule.events());

    match output {
        Some(path) => {
            std::fs::write(&path, ics)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{}",
                format!("Exported {} events to {}", schedule.len(), path.display()).green()
            );
        }
        None => print!("{}", ics),
    }

    Ok(())
}
