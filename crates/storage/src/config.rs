//! Runtime configuration loaded from the environment.

use std::{env, path::PathBuf};

use log::LevelFilter;

use crate::{Error, file::FileStorage, local_storage::LocalStorage};

pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the persisted JSON documents.
    pub data_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Load `FITLOG_DATA_DIR` and `FITLOG_LOG` from the environment or a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            data_dir: lookup("FITLOG_DATA_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map_or(default.data_dir, PathBuf::from),
            log_level: match lookup("FITLOG_LOG") {
                Some(level) => level
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("FITLOG_LOG", level))?,
                None => default.log_level,
            },
        })
    }

    pub fn open_storage(&self) -> Result<LocalStorage<FileStorage>, Error> {
        Ok(LocalStorage::new(FileStorage::open(&self.data_dir)?))
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fitlog_domain::WorkoutRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case::defaults(&[], Ok(Config::default()))]
    #[case::data_dir(
        &[("FITLOG_DATA_DIR", "/var/lib/fitlog")],
        Ok(Config { data_dir: PathBuf::from("/var/lib/fitlog"), log_level: LevelFilter::Info })
    )]
    #[case::empty_data_dir(&[("FITLOG_DATA_DIR", " ")], Ok(Config::default()))]
    #[case::log_level(
        &[("FITLOG_LOG", "debug")],
        Ok(Config { data_dir: PathBuf::from("data"), log_level: LevelFilter::Debug })
    )]
    #[case::invalid_log_level(
        &[("FITLOG_LOG", "loud")],
        Err(ConfigError::Invalid("FITLOG_LOG", "loud".to_string()))
    )]
    fn test_config_from_lookup(
        #[case] vars: &[(&str, &str)],
        #[case] expected: Result<Config, ConfigError>,
    ) {
        assert_eq!(Config::from_lookup(lookup(vars)), expected);
    }

    #[test]
    fn test_open_storage() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().join("fitlog"),
            ..Config::default()
        };

        let storage = config.open_storage().unwrap();

        assert!(storage.load_workouts().unwrap().is_empty());
        assert!(dir.path().join("fitlog").is_dir());
    }
}
