pub mod auth;
pub mod calendar;
pub mod event;
pub mod export;
pub mod home;
pub mod profile;
pub mod settings;

use anyhow::Result;
use chrono::{Duration, Local, NaiveDate};

/// Parse a day given as YYYY-MM-DD, "yesterday", "today" or "tomorrow".
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    parse_day_relative(input, today)
}

fn parse_day_relative(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    match input.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => Ok(today + Duration::days(1)),
        "yesterday" => Ok(today - Duration::days(1)),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d").map_err(|_| {
            anyhow::anyhow!(
                "Invalid date '{}'. Expected YYYY-MM-DD, \"yesterday\", \"today\" or \"tomorrow\"",
                input
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_relative_and_absolute_days() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert_eq!(parse_day_relative("today", today).unwrap(), today);
        assert_eq!(
            parse_day_relative("Tomorrow", today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 21).unwrap()
        );
        assert_eq!(
            parse_day_relative("2025-04-01", today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
        );
        assert_eq!(
            parse_day_relative("yesterday", today).unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 19).unwrap()
        );

        let err = parse_day_relative("next week", today).unwrap_err();
        assert!(err.to_string().contains("\"yesterday\""));
    }
}
