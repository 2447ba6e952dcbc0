//! Core types for pitchside.
//!
//! This crate holds everything the front end needs to run a football-school
//! schedule without a backend:
//! - `user` and `directory` for accounts and the mock user database
//! - `auth` and `session` for signing in and keeping the session on disk
//! - `event`, `form` and `schedule` for creating and querying events
//! - `storage` for the key-value persistence both of the above sit on

pub mod auth;
pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod event;
pub mod form;
pub mod ics;
pub mod schedule;
pub mod session;
pub mod stats;
pub mod storage;
pub mod user;

pub use error::{PitchsideError, PitchsideResult};
pub use event::{Event, EventKind};
pub use user::{Role, User};
