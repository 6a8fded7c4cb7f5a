use std::collections::VecDeque;

use fitlog_app::{Language, LanguageRepository, Theme, ThemeRepository, log};
use fitlog_domain::{self as domain, ReadError, StorageError, UpdateError, WorkoutRepository};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use strum::AsRefStr;

use crate::{Error, KeyValueStorage};

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "fitness-workouts")]
    Workouts,
    #[strum(serialize = "fitness-theme")]
    Theme,
    #[strum(serialize = "fitness-language")]
    Language,
    #[strum(serialize = "log")]
    Log,
}

/// Repositories for all persisted state on top of a key-value storage.
pub struct LocalStorage<S> {
    storage: S,
}

impl<S: KeyValueStorage> LocalStorage<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    fn read<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, Error> {
        match self.storage.get(key.as_ref())? {
            Some(value) => Ok(Some(serde_json::from_str(&value)?)),
            None => Ok(None),
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: Key, value: &T) -> Result<(), Error> {
        self.storage
            .set(key.as_ref(), &serde_json::to_string(value)?)
    }

    pub fn clear(&self) -> Result<(), Error> {
        for key in [Key::Workouts, Key::Theme, Key::Language, Key::Log] {
            self.storage.remove(key.as_ref())?;
        }
        Ok(())
    }
}

impl<S: KeyValueStorage> WorkoutRepository for LocalStorage<S> {
    fn load_workouts(&self) -> Result<Vec<domain::Workout>, ReadError> {
        Ok(self
            .read::<Vec<Workout>>(Key::Workouts)
            .map_err(StorageError::from)?
            .unwrap_or_default()
            .into_iter()
            .map(domain::Workout::from)
            .collect())
    }

    fn save_workouts(&self, workouts: &[domain::Workout]) -> Result<(), UpdateError> {
        self.write(
            Key::Workouts,
            &workouts.iter().map(Workout::from).collect::<Vec<_>>(),
        )
        .map_err(StorageError::from)?;
        Ok(())
    }
}

impl<S: KeyValueStorage> ThemeRepository for LocalStorage<S> {
    fn read_theme(&self) -> Result<Option<Theme>, ReadError> {
        Ok(self
            .read::<ThemeState>(Key::Theme)
            .map_err(StorageError::from)?
            .map(|state| state.mode))
    }

    fn write_theme(&self, theme: Theme) -> Result<(), UpdateError> {
        self.write(Key::Theme, &ThemeState { mode: theme })
            .map_err(StorageError::from)?;
        Ok(())
    }
}

impl<S: KeyValueStorage> LanguageRepository for LocalStorage<S> {
    fn read_language(&self) -> Result<Option<Language>, ReadError> {
        Ok(self
            .read::<LanguageState>(Key::Language)
            .map_err(StorageError::from)?
            .map(|state| state.language))
    }

    fn write_language(&self, language: Language) -> Result<(), UpdateError> {
        self.write(Key::Language, &LanguageState { language })
            .map_err(StorageError::from)?;
        Ok(())
    }
}

impl<S: KeyValueStorage + Send + Sync + 'static> log::Repository for LocalStorage<S> {
    fn read_entries(&self) -> Result<VecDeque<log::Entry>, log::Error> {
        self.read(Key::Log)
            .map(Option::unwrap_or_default)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }

    fn write_entry(&self, entry: log::Entry) -> Result<(), log::Error> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(log::CAPACITY);
        self.write(Key::Log, &entries)
            .map_err(|err| log::Error::Unknown(err.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub duration: u32,
    #[serde(deserialize_with = "deserialize_amount")]
    pub calories: u32,
    pub date: String,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.clone(),
            duration: value.duration,
            calories: value.calories,
            date: value.date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl From<Workout> for domain::Workout {
    fn from(value: Workout) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            duration: value.duration,
            calories: value.calories,
            date: domain::normalize_date(&value.date.into()),
        }
    }
}

fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    f64::deserialize(deserializer).map(domain::normalize_amount)
}

#[derive(Serialize, Deserialize)]
struct ThemeState {
    mode: Theme,
}

#[derive(Serialize, Deserialize)]
struct LanguageState {
    language: Language,
}
