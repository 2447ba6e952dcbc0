//! The signed-in user under a single storage key.

use tracing::{debug, warn};

use crate::constants::SESSION_KEY;
use crate::error::PitchsideResult;
use crate::storage::{self, Storage};
use crate::user::User;

pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        SessionStore { storage }
    }

    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save(&self, user: &User) -> PitchsideResult<()> {
        storage::save_json(&self.storage, SESSION_KEY, user)?;
        debug!(user_id = %user.id, "saved session");
        Ok(())
    }

    /// The stored user, if any. A value that no longer parses counts as
    /// no session.
    pub fn load(&self) -> PitchsideResult<Option<User>> {
        let Some(json) = self.storage.get_item(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&json) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                warn!("Ignoring unreadable stored session: {}", e);
                Ok(None)
            }
        }
    }

    pub fn clear(&self) -> PitchsideResult<()> {
        self.storage.remove_item(SESSION_KEY)?;
        debug!("cleared session");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, MemoryStorage};
    use crate::user::Role;

    fn coach() -> User {
        User {
            id: "1".to_string(),
            name: "John Coach".to_string(),
            email: "coach@example.com".to_string(),
            role: Role::Coach,
        }
    }

    #[test]
    fn save_then_load_returns_user() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&coach()).unwrap();
        assert_eq!(store.load().unwrap(), Some(coach()));
    }

    #[test]
    fn clear_removes_session() {
        let store = SessionStore::new(MemoryStorage::new());
        store.save(&coach()).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn corrupt_session_loads_as_none() {
        let storage = MemoryStorage::new();
        storage.set_item(SESSION_KEY, "{not json").unwrap();
        let store = SessionStore::new(storage);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn stored_json_has_no_password_field() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(FileStorage::new(dir.path()));
        store.save(&coach()).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("user.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["role"], "coach");
        assert!(value.get("password").is_none());
    }
}
