//! Storage and session wiring shared by the commands.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use pitchside_core::User;
use pitchside_core::auth::{AuthOptions, AuthService};
use pitchside_core::config::Settings;
use pitchside_core::directory::UserDirectory;
use pitchside_core::schedule::Schedule;
use pitchside_core::session::{SessionManager, SessionStore};
use pitchside_core::storage::FileStorage;

use crate::utils::tui::create_spinner;

pub struct App {
    pub storage: Arc<FileStorage>,
    pub session: SessionManager<Arc<FileStorage>>,
}

impl App {
    pub fn load() -> Result<Self> {
        let settings = Settings::load()?;
        let storage = Arc::new(FileStorage::new(settings.data_path()));

        let directory = UserDirectory::load(storage.as_ref(), settings.auth.bcrypt_cost)
            .context("Failed to load accounts")?;
        let auth = AuthService::new(directory, AuthOptions::from(&settings.auth));
        let session = SessionManager::new(auth, SessionStore::new(storage.clone()));

        Ok(App { storage, session })
    }

    /// Load the app and pick up the saved session, if any.
    pub async fn start() -> Result<Self> {
        let mut app = Self::load()?;

        let spinner = create_spinner("Loading".to_string());
        app.session.restore().await;
        spinner.finish_and_clear();

        Ok(app)
    }

    /// The signed-in user, or an error pointing at `pitchside login`.
    pub fn user(&self) -> Result<User> {
        match self.session.user() {
            Some(user) => Ok(user.clone()),
            None => anyhow::bail!(
                "Not signed in.\n\n\
                Sign in with:\n  \
                pitchside login <email>\n\n\
                or create an account with:\n  \
                pitchside register"
            ),
        }
    }

    pub fn schedule(&self) -> Result<Schedule> {
        Schedule::load(self.storage.as_ref()).context("Failed to load events")
    }

    pub fn save_schedule(&self, schedule: &Schedule) -> Result<()> {
        schedule.save(self.storage.as_ref())?;
        Ok(())
    }
}

/// Current local wall-clock time.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
