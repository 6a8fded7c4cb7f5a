#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use fitlog_domain::StorageError;

pub mod config;
pub mod file;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;


/// String key-value store holding one JSON document per key.
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        (**self).remove(key)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid key {0:?}")]
    InvalidKey(String),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<Error> for StorageError {
    fn from(value: Error) -> Self {
        match value {
            Error::Json(err) => StorageError::Corrupted(err.to_string()),
            Error::Poisoned => StorageError::Unavailable,
            err => StorageError::Other(Box::new(err)),
        }
    }
}
