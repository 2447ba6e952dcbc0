//! Global configuration at ~/.config/pitchside/config.toml
//!
//! Read through the `config` crate so `PITCHSIDE_*` environment variables
//! can override file values (`PITCHSIDE_AUTH__AUTO_REGISTER=true`).

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BCRYPT_COST, DEFAULT_FETCH_DELAY_MS, DEFAULT_LOGIN_DELAY_MS};
use crate::error::{PitchsideError, PitchsideResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub login_delay_ms: u64,
    pub fetch_delay_ms: u64,
    pub auto_register: bool,
    pub bcrypt_cost: u32,
}

/// User preferences from the settings screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub notifications: bool,
    pub match_alerts: bool,
    pub training_reminders: bool,
    pub dark_mode: bool,
    pub language: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("pitchside"))
        .unwrap_or_else(|| PathBuf::from("~/.pitchside"))
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_dir: default_data_dir(),
            auth: AuthSettings::default(),
            preferences: Preferences::default(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        AuthSettings {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            fetch_delay_ms: DEFAULT_FETCH_DELAY_MS,
            auto_register: false,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            notifications: true,
            match_alerts: true,
            training_reminders: true,
            dark_mode: false,
            language: "English".to_string(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PitchsideResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PitchsideError::Config("Could not determine config directory".into()))?
            .join("pitchside");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, creating a commented default on first run.
    pub fn load() -> PitchsideResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> PitchsideResult<Self> {
        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(
                Environment::with_prefix("PITCHSIDE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| PitchsideError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PitchsideError::Config(e.to_string()))
    }

    /// Change one preference in the global config file.
    pub fn set_preference(key: &str, value: &str) -> PitchsideResult<Preferences> {
        let path = Self::config_path()?;
        if !path.exists() {
            Self::create_default_config(&path)?;
        }
        Self::set_preference_at(&path, key, value)
    }

    /// Rewrite only the `[preferences]` table of the file at `path`.
    ///
    /// Environment overrides are not consulted and other tables are kept
    /// as the file has them.
    pub fn set_preference_at(
        path: &Path,
        key: &str,
        value: &str,
    ) -> PitchsideResult<Preferences> {
        let mut table = match std::fs::read_to_string(path) {
            Ok(content) => content
                .parse::<toml::Table>()
                .map_err(|e| PitchsideError::Config(e.to_string()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => toml::Table::new(),
            Err(e) => return Err(e.into()),
        };

        let mut preferences: Preferences = match table.remove("preferences") {
            Some(value) => value
                .try_into()
                .map_err(|e: toml::de::Error| PitchsideError::Config(e.to_string()))?,
            None => Preferences::default(),
        };
        preferences.set(key, value)?;

        let updated = toml::Value::try_from(&preferences)
            .map_err(|e| PitchsideError::Config(e.to_string()))?;
        table.insert("preferences".to_string(), updated);

        let content =
            toml::to_string_pretty(&table).map_err(|e| PitchsideError::Config(e.to_string()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| PitchsideError::Config(format!("Could not write config file: {e}")))?;

        Ok(preferences)
    }

    /// Where local storage lives, with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_dir.to_string_lossy()).into_owned())
    }

    /// Write a config file with every option commented out.
    pub fn create_default_config(path: &Path) -> PitchsideResult<()> {
        let contents = format!(
            "\
# pitchside configuration

# Where the session and schedule are stored:
# data_dir = \"{}\"

[auth]
# Simulated backend latency
# login_delay_ms = {}
# fetch_delay_ms = {}

# Signing in with an unknown email creates a student account:
# auto_register = false

# bcrypt cost for stored password hashes (4-31):
# bcrypt_cost = {}

[preferences]
# notifications = true
# match_alerts = true
# training_reminders = true
# dark_mode = false
# language = \"English\"
",
            default_data_dir().display(),
            DEFAULT_LOGIN_DELAY_MS,
            DEFAULT_FETCH_DELAY_MS,
            DEFAULT_BCRYPT_COST,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PitchsideError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PitchsideError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

impl Preferences {
    pub const KEYS: [&'static str; 5] = [
        "notifications",
        "match_alerts",
        "training_reminders",
        "dark_mode",
        "language",
    ];

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("notifications", self.notifications.to_string()),
            ("match_alerts", self.match_alerts.to_string()),
            ("training_reminders", self.training_reminders.to_string()),
            ("dark_mode", self.dark_mode.to_string()),
            ("language", self.language.clone()),
        ]
    }

    pub fn set(&mut self, key: &str, value: &str) -> PitchsideResult<()> {
        match key {
            "notifications" => self.notifications = parse_bool(key, value)?,
            "match_alerts" => self.match_alerts = parse_bool(key, value)?,
            "training_reminders" => self.training_reminders = parse_bool(key, value)?,
            "dark_mode" => self.dark_mode = parse_bool(key, value)?,
            "language" => {
                if value.trim().is_empty() {
                    return Err(PitchsideError::Config("language cannot be empty".into()));
                }
                self.language = value.trim().to_string();
            }
            other => {
                return Err(PitchsideError::Config(format!(
                    "Unknown setting '{}'. Available: {}",
                    other,
                    Self::KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> PitchsideResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "on" | "yes" => Ok(true),
        "false" | "off" | "no" => Ok(false),
        _ => Err(PitchsideError::Config(format!(
            "'{}' expects on/off, got '{}'",
            key, value
        ))),
    }
}
