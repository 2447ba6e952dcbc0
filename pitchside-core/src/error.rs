//! Error types for pitchside.

use thiserror::Error;

use crate::form::FormError;

/// Errors that can occur in pitchside operations.
#[derive(Error, Debug)]
pub enum PitchsideError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists")]
    UserExists,

    #[error("Not signed in")]
    NotSignedIn,

    #[error("Only coaches can {0}")]
    Forbidden(&'static str),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Event id '{0}' matches more than one event")]
    AmbiguousEventId(String),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PitchsideError {
    fn from(e: serde_json::Error) -> Self {
        PitchsideError::Serialization(e.to_string())
    }
}

impl From<bcrypt::BcryptError> for PitchsideError {
    fn from(e: bcrypt::BcryptError) -> Self {
        PitchsideError::PasswordHash(e.to_string())
    }
}

/// Result type alias for pitchside operations.
pub type PitchsideResult<T> = Result<T, PitchsideError>;
