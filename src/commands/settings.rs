use anyhow::Result;
use owo_colors::OwoColorize;
use pitchside_core::config::Settings;

use crate::render::Render;

pub fn show() -> Result<()> {
    let settings = Settings::load()?;

    println!("{}", "Preferences".bold());
    println!("{}", settings.preferences.render());
    println!();
    println!("{}", format!("Config: {}", Settings::config_path()?.display()).dimmed());
    println!("{}", format!("Data:   {}", settings.data_path().display()).dimmed());

    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    Settings::set_preference(key, value)?;

    println!("{}", format!("Updated {}", key).green());
    Ok(())
}
