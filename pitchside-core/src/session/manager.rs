use tracing::{error, info, warn};

use super::SessionStore;
use crate::auth::AuthService;
use crate::error::{PitchsideError, PitchsideResult};
use crate::storage::Storage;
use crate::user::{Role, User};

/// Current sign-in state.
///
/// `loading` is true only while an operation is in flight. Each operation
/// replaces the current user wholesale, so the last call to finish wins.
pub struct SessionManager<S> {
    auth: AuthService,
    store: SessionStore<S>,
    user: Option<User>,
    loading: bool,
}

impl<S: Storage> SessionManager<S> {
    pub fn new(auth: AuthService, store: SessionStore<S>) -> Self {
        SessionManager {
            auth,
            store,
            user: None,
            loading: true,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The signed-in user, or `NotSignedIn`.
    pub fn require_user(&self) -> PitchsideResult<&User> {
        self.user.as_ref().ok_or(PitchsideError::NotSignedIn)
    }

    /// Pick up a session persisted by an earlier run.
    ///
    /// The stored record is refreshed from the backend when the backend
    /// still knows the user; otherwise the stored copy is used as is.
    /// Failures leave the session signed out.
    pub async fn restore(&mut self) -> Option<&User> {
        self.loading = true;

        match self.store.load() {
            Ok(Some(stored)) => {
                let refreshed = self.auth.fetch_user(&stored.id).await;
                self.user = Some(refreshed.unwrap_or(stored));
            }
            Ok(None) => {}
            Err(e) => error!("Failed to load user: {}", e),
        }

        self.loading = false;
        self.user.as_ref()
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> PitchsideResult<&User> {
        self.loading = true;
        let known_accounts = self.auth.directory().len();
        let result = self.auth.login(email, password).await;
        let created = self.auth.directory().len() != known_accounts;
        self.finish_sign_in(result, created, "Sign in")
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> PitchsideResult<&User> {
        self.loading = true;
        let result = self.auth.register(name, email, password, role).await;
        self.finish_sign_in(result, true, "Registration")
    }

    pub fn sign_out(&mut self) -> PitchsideResult<()> {
        self.loading = true;
        let result = self.store.clear();
        self.loading = false;

        match result {
            Ok(()) => {
                if let Some(user) = self.user.take() {
                    info!(user_id = %user.id, "signed out");
                }
                Ok(())
            }
            Err(e) => {
                error!("Sign out error: {}", e);
                Err(e)
            }
        }
    }

    /// Persist the new session and, when the backend gained an account,
    /// the directory. The user is only set once everything is saved.
    fn finish_sign_in(
        &mut self,
        result: PitchsideResult<User>,
        account_created: bool,
        operation: &str,
    ) -> PitchsideResult<&User> {
        self.loading = false;

        let user = result.inspect_err(|e| warn!("{} error: {}", operation, e))?;
        if account_created {
            self.auth
                .directory()
                .save(self.store.storage())
                .inspect_err(|e| error!("Error saving accounts to storage: {}", e))?;
        }
        self.store
            .save(&user)
            .inspect_err(|e| error!("Error saving user to storage: {}", e))?;

        Ok(&*self.user.insert(user))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::auth::AuthOptions;
    use crate::directory::UserDirectory;
    use crate::storage::{FileStorage, MemoryStorage};

    fn manager(storage: Arc<MemoryStorage>) -> SessionManager<Arc<MemoryStorage>> {
        let directory = UserDirectory::with_demo_accounts(4).unwrap();
        let auth = AuthService::new(directory, AuthOptions::immediate());
        SessionManager::new(auth, SessionStore::new(storage))
    }

    /// A fresh process over an existing data directory.
    fn file_manager(storage: Arc<FileStorage>) -> SessionManager<Arc<FileStorage>> {
        let directory = UserDirectory::load(storage.as_ref(), 4).unwrap();
        let auth = AuthService::new(directory, AuthOptions::immediate());
        SessionManager::new(auth, SessionStore::new(storage))
    }

    /// Memory storage whose writes can be switched to fail.
    #[derive(Default)]
    struct BrokenDisk {
        items: MemoryStorage,
        fail_writes: AtomicBool,
    }

    impl BrokenDisk {
        fn check(&self) -> PitchsideResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(PitchsideError::Storage("disk full".into()));
            }
            Ok(())
        }
    }

    impl Storage for BrokenDisk {
        fn get_item(&self, key: &str) -> PitchsideResult<Option<String>> {
            self.items.get_item(key)
        }

        fn set_item(&self, key: &str, value: &str) -> PitchsideResult<()> {
            self.check()?;
            self.items.set_item(key, value)
        }

        fn remove_item(&self, key: &str) -> PitchsideResult<()> {
            self.check()?;
            self.items.remove_item(key)
        }
    }

    fn broken_manager(storage: Arc<BrokenDisk>) -> SessionManager<Arc<BrokenDisk>> {
        let directory = UserDirectory::with_demo_accounts(4).unwrap();
        let auth = AuthService::new(directory, AuthOptions::immediate());
        SessionManager::new(auth, SessionStore::new(storage))
    }

    #[tokio::test]
    async fn sign_in_persists_session() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = manager(storage.clone());

        let user = session
            .sign_in("student@example.com", "password123")
            .await
            .unwrap()
            .clone();

        assert!(!session.is_loading());
        assert_eq!(session.user(), Some(&user));
        assert_eq!(SessionStore::new(storage).load().unwrap(), Some(user));
    }

    #[tokio::test]
    async fn failed_sign_in_keeps_previous_state() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = manager(storage.clone());

        let err = session.sign_in("student@example.com", "bad").await.unwrap_err();

        assert!(matches!(err, PitchsideError::InvalidCredentials));
        assert!(!session.is_loading());
        assert!(session.user().is_none());
        assert_eq!(SessionStore::new(storage).load().unwrap(), None);
    }

    #[tokio::test]
    async fn sign_out_then_restore_has_no_user() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = manager(storage.clone());
        session.sign_in("coach@example.com", "password123").await.unwrap();

        session.sign_out().unwrap();
        assert!(session.user().is_none());

        let mut next_run = manager(storage);
        assert!(next_run.restore().await.is_none());
        assert!(!next_run.is_loading());
    }

    #[tokio::test]
    async fn restore_refreshes_known_user() {
        let storage = Arc::new(MemoryStorage::new());
        let stale = User {
            id: "1".to_string(),
            name: "Old Name".to_string(),
            email: "coach@example.com".to_string(),
            role: Role::Coach,
        };
        SessionStore::new(storage.clone()).save(&stale).unwrap();

        let mut session = manager(storage);
        let user = session.restore().await.unwrap();
        assert_eq!(user.name, "John Coach");
    }

    #[tokio::test]
    async fn restore_falls_back_to_stored_user() {
        let storage = Arc::new(MemoryStorage::new());
        let remembered = User {
            id: "42".to_string(),
            name: "Remembered".to_string(),
            email: "remembered@example.com".to_string(),
            role: Role::Student,
        };
        SessionStore::new(storage.clone()).save(&remembered).unwrap();

        let mut session = manager(storage);
        assert_eq!(session.restore().await, Some(&remembered));
    }

    #[tokio::test]
    async fn register_signs_in_new_user() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = manager(storage);

        let user = session
            .register("Casey", "casey@example.com", "pw", Role::Coach)
            .await
            .unwrap();
        assert_eq!(user.role, Role::Coach);
        assert_eq!(session.require_user().unwrap().email, "casey@example.com");
    }

    #[tokio::test]
    async fn register_existing_email_fails() {
        let storage = Arc::new(MemoryStorage::new());
        let mut session = manager(storage);

        let err = session
            .register("Dup", "coach@example.com", "pw", Role::Coach)
            .await
            .unwrap_err();
        assert!(matches!(err, PitchsideError::UserExists));
        assert!(matches!(session.require_user(), Err(PitchsideError::NotSignedIn)));
    }

    #[tokio::test]
    async fn registered_account_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Arc::new(FileStorage::new(dir.path()));

        let mut first_run = file_manager(storage.clone());
        let registered = first_run
            .register("Pat", "pat@example.com", "pw", Role::Student)
            .await
            .unwrap()
            .clone();
        assert_eq!(registered.id, "3");
        first_run.sign_out().unwrap();

        let mut second_run = file_manager(storage.clone());
        let user = second_run.sign_in("pat@example.com", "pw").await.unwrap();
        assert_eq!(user, &registered);
        second_run.sign_out().unwrap();

        let mut third_run = file_manager(storage);
        let err = third_run
            .register("Imposter", "pat@example.com", "other", Role::Student)
            .await
            .unwrap_err();
        assert!(matches!(err, PitchsideError::UserExists));
    }

    #[tokio::test]
    async fn failed_session_save_leaves_user_signed_out() {
        let storage = Arc::new(BrokenDisk::default());
        storage.fail_writes.store(true, Ordering::SeqCst);
        let mut session = broken_manager(storage);

        let err = session
            .sign_in("coach@example.com", "password123")
            .await
            .unwrap_err();

        assert!(matches!(err, PitchsideError::Storage(_)));
        assert!(!session.is_loading());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn failed_sign_out_keeps_user() {
        let storage = Arc::new(BrokenDisk::default());
        let mut session = broken_manager(storage.clone());
        session
            .sign_in("coach@example.com", "password123")
            .await
            .unwrap();

        storage.fail_writes.store(true, Ordering::SeqCst);
        assert!(session.sign_out().is_err());

        assert!(!session.is_loading());
        assert_eq!(session.user().map(|u| u.id.as_str()), Some("1"));
        assert!(SessionStore::new(storage).load().unwrap().is_some());
    }
}
