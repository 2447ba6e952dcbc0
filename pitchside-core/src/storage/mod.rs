//! Key-value persistence.
//!
//! The app keeps a handful of string values on the device (the signed-in
//! user, the schedule). `Storage` is the seam: `FileStorage` writes them to
//! a data directory, `MemoryStorage` keeps them in process for tests and
//! throwaway sessions.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::PitchsideResult;

pub trait Storage {
    /// Returns `None` when nothing is stored under `key`.
    fn get_item(&self, key: &str) -> PitchsideResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> PitchsideResult<()>;

    /// Removing a missing key is not an error.
    fn remove_item(&self, key: &str) -> PitchsideResult<()>;
}

impl<T: Storage + ?Sized> Storage for std::sync::Arc<T> {
    fn get_item(&self, key: &str) -> PitchsideResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> PitchsideResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> PitchsideResult<()> {
        (**self).remove_item(key)
    }
}

/// Serialize `value` as JSON and store it under `key`.
pub fn save_json<S, T>(storage: &S, key: &str, value: &T) -> PitchsideResult<()>
where
    S: Storage + ?Sized,
    T: Serialize,
{
    let json = serde_json::to_string(value)?;
    storage.set_item(key, &json)
}

/// Read the value under `key` and parse it as JSON.
pub fn load_json<S, T>(storage: &S, key: &str) -> PitchsideResult<Option<T>>
where
    S: Storage + ?Sized,
    T: DeserializeOwned,
{
    match storage.get_item(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
