use std::{collections::BTreeMap, sync::Mutex};

use crate::{Error, KeyValueStorage};

/// Volatile storage, used where nothing must outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| Error::Poisoned)?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .lock()
            .map_err(|_| Error::Poisoned)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries
            .lock()
            .map_err(|_| Error::Poisoned)?
            .remove(key);
        Ok(())
    }
}
