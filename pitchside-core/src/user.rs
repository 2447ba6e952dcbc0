//! Accounts as seen by the rest of the app.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PitchsideError, PitchsideResult};

/// A signed-in user. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Coach,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Coach => "coach",
        }
    }

    /// Coaches add, edit and delete events; students only read them.
    pub fn can_manage_events(&self) -> bool {
        matches!(self, Role::Coach)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "coach" => Ok(Role::Coach),
            other => Err(format!(
                "Unknown role '{}'. Expected 'student' or 'coach'",
                other
            )),
        }
    }
}

impl User {
    /// Fails with `Forbidden` unless this user may change the schedule.
    pub fn ensure_can_manage_events(&self, action: &'static str) -> PitchsideResult<()> {
        if self.role.can_manage_events() {
            Ok(())
        } else {
            Err(PitchsideError::Forbidden(action))
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}
