//! User directory standing in for a user database.
//!
//! Accounts live in memory and are written to storage under `users` so that
//! registrations outlive the process.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::USERS_KEY;
use crate::error::{PitchsideError, PitchsideResult};
use crate::storage::{self, Storage};
use crate::user::{Role, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Account {
    user: User,
    password_hash: String,
}

/// Accounts known to the mock backend, in insertion order.
pub struct UserDirectory {
    accounts: Vec<Account>,
    bcrypt_cost: u32,
}

impl UserDirectory {
    pub fn empty(bcrypt_cost: u32) -> Self {
        UserDirectory {
            accounts: Vec::new(),
            bcrypt_cost,
        }
    }

    /// Directory seeded with one coach and one student, both using
    /// `password123`.
    pub fn with_demo_accounts(bcrypt_cost: u32) -> PitchsideResult<Self> {
        let mut directory = Self::empty(bcrypt_cost);
        directory.insert(
            "John Coach",
            "coach@example.com",
            "password123",
            Role::Coach,
        )?;
        directory.insert(
            "Sam Student",
            "student@example.com",
            "password123",
            Role::Student,
        )?;
        Ok(directory)
    }

    /// Accounts saved by an earlier run. The demo accounts are seeded and
    /// saved when nothing is stored yet.
    pub fn load<S: Storage + ?Sized>(storage: &S, bcrypt_cost: u32) -> PitchsideResult<Self> {
        match storage::load_json::<_, Vec<Account>>(storage, USERS_KEY)? {
            Some(accounts) => Ok(UserDirectory {
                accounts,
                bcrypt_cost,
            }),
            None => {
                let directory = Self::with_demo_accounts(bcrypt_cost)?;
                directory.save(storage)?;
                Ok(directory)
            }
        }
    }

    pub fn save<S: Storage + ?Sized>(&self, storage: &S) -> PitchsideResult<()> {
        storage::save_json(storage, USERS_KEY, &self.accounts)?;
        debug!(accounts = self.accounts.len(), "saved user directory");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.accounts.iter().any(|a| a.user.email == email)
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.accounts
            .iter()
            .find(|a| a.user.id == id)
            .map(|a| a.user.clone())
    }

    /// The user whose email and password both match.
    pub fn authenticate(&self, email: &str, password: &str) -> PitchsideResult<Option<User>> {
        let Some(account) = self.accounts.iter().find(|a| a.user.email == email) else {
            return Ok(None);
        };

        if bcrypt::verify(password, &account.password_hash)? {
            Ok(Some(account.user.clone()))
        } else {
            Ok(None)
        }
    }

    /// Add an account. Ids are assigned sequentially starting at "1".
    pub fn insert(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> PitchsideResult<User> {
        if self.contains_email(email) {
            return Err(PitchsideError::UserExists);
        }

        let user = User {
            id: (self.accounts.len() + 1).to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
        };
        let password_hash = bcrypt::hash(password, self.bcrypt_cost)?;

        self.accounts.push(Account {
            user: user.clone(),
            password_hash,
        });

        Ok(user)
    }
}
