//! Mock authentication backend.
//!
//! Behaves like a remote auth API: every call waits a configurable latency
//! before answering from the in-memory `UserDirectory`.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::AuthSettings;
use crate::directory::UserDirectory;
use crate::error::{PitchsideError, PitchsideResult};
use crate::user::{Role, User};

#[derive(Debug, Clone)]
pub struct AuthOptions {
    pub login_delay: Duration,
    pub fetch_delay: Duration,
    /// Sign-in with an unknown email creates a student account instead of failing.
    pub auto_register: bool,
}

impl AuthOptions {
    /// No latency, no auto-registration.
    pub fn immediate() -> Self {
        AuthOptions {
            login_delay: Duration::ZERO,
            fetch_delay: Duration::ZERO,
            auto_register: false,
        }
    }
}

impl From<&AuthSettings> for AuthOptions {
    fn from(settings: &AuthSettings) -> Self {
        AuthOptions {
            login_delay: Duration::from_millis(settings.login_delay_ms),
            fetch_delay: Duration::from_millis(settings.fetch_delay_ms),
            auto_register: settings.auto_register,
        }
    }
}

pub struct AuthService {
    directory: UserDirectory,
    options: AuthOptions,
}

impl AuthService {
    pub fn new(directory: UserDirectory, options: AuthOptions) -> Self {
        AuthService { directory, options }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub async fn login(&mut self, email: &str, password: &str) -> PitchsideResult<User> {
        sleep(self.options.login_delay).await;

        if let Some(user) = self.directory.authenticate(email, password)? {
            info!(user_id = %user.id, "signed in");
            return Ok(user);
        }

        let can_auto_register = self.options.auto_register
            && !email.is_empty()
            && !password.is_empty()
            && !self.directory.contains_email(email);

        if can_auto_register {
            let name = email.split('@').next().unwrap_or(email);
            let user = self.directory.insert(name, email, password, Role::Student)?;
            info!(user_id = %user.id, "created demo account on sign-in");
            return Ok(user);
        }

        Err(PitchsideError::InvalidCredentials)
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> PitchsideResult<User> {
        sleep(self.options.login_delay).await;

        let user = self.directory.insert(name, email, password, role)?;
        info!(user_id = %user.id, role = %user.role, "registered");
        Ok(user)
    }

    pub async fn fetch_user(&self, user_id: &str) -> Option<User> {
        sleep(self.options.fetch_delay).await;

        let user = self.directory.get(user_id);
        debug!(user_id, found = user.is_some(), "fetched user");
        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(auto_register: bool) -> AuthService {
        let directory = UserDirectory::with_demo_accounts(4).unwrap();
        let options = AuthOptions {
            auto_register,
            ..AuthOptions::immediate()
        };
        AuthService::new(directory, options)
    }

    #[tokio::test]
    async fn login_with_matching_credentials() {
        let mut auth = service(false);
        let user = auth.login("coach@example.com", "password123").await.unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(user.role, Role::Coach);

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let mut auth = service(true);
        let err = auth.login("coach@example.com", "nope").await.unwrap_err();
        assert!(matches!(err, PitchsideError::InvalidCredentials));
    }

    #[tokio::test]
    async fn unknown_email_fails_without_auto_register() {
        let mut auth = service(false);
        let err = auth.login("new@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, PitchsideError::InvalidCredentials));
        assert_eq!(auth.directory().len(), 2);
    }

    #[tokio::test]
    async fn unknown_email_creates_student_with_auto_register() {
        let mut auth = service(true);
        let user = auth.login("jordan@example.com", "pw").await.unwrap();

        assert_eq!(user.id, "3");
        assert_eq!(user.name, "jordan");
        assert_eq!(user.role, Role::Student);

        // The new account can sign in normally afterwards
        let again = auth.login("jordan@example.com", "pw").await.unwrap();
        assert_eq!(again, user);
    }

    #[tokio::test]
    async fn auto_register_needs_both_fields() {
        let mut auth = service(true);
        assert!(auth.login("", "pw").await.is_err());
        assert!(auth.login("someone@example.com", "").await.is_err());
    }

    #[tokio::test]
    async fn register_rejects_existing_email() {
        let mut auth = service(false);
        let err = auth
            .register("Other", "student@example.com", "pw", Role::Student)
            .await
            .unwrap_err();
        assert!(matches!(err, PitchsideError::UserExists));
    }

    #[tokio::test]
    async fn register_returns_role_tagged_user() {
        let mut auth = service(false);
        let user = auth
            .register("Pat Coach", "pat@example.com", "pw", Role::Coach)
            .await
            .unwrap();

        assert_eq!(user.role, Role::Coach);
        assert_eq!(auth.fetch_user(&user.id).await, Some(user));
    }

    #[tokio::test(start_paused = true)]
    async fn login_waits_for_simulated_latency() {
        let directory = UserDirectory::with_demo_accounts(4).unwrap();
        let options = AuthOptions {
            login_delay: Duration::from_millis(1000),
            ..AuthOptions::immediate()
        };
        let mut auth = AuthService::new(directory, options);

        let started = tokio::time::Instant::now();
        auth.login("student@example.com", "password123").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
