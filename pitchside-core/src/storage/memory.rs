use std::collections::HashMap;
use std::sync::Mutex;

use super::Storage;
use crate::error::{PitchsideError, PitchsideResult};

/// Process-local storage. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_items<R>(
        &self,
        f: impl FnOnce(&mut HashMap<String, String>) -> R,
    ) -> PitchsideResult<R> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| PitchsideError::Storage("memory storage lock poisoned".into()))?;
        Ok(f(&mut *items))
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> PitchsideResult<Option<String>> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> PitchsideResult<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> PitchsideResult<()> {
        self.with_items(|items| {
            items.remove(key);
        })
    }
}
