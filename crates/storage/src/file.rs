use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{Error, KeyValueStorage};

/// Storage keeping each key as `<key>.json` in a data directory.
///
/// Values are written to a temporary file which is then renamed over the previous value, so a
/// reader never observes a partially written document.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Opens the data directory, creating it if necessary.
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self, Error> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        debug!("opened file storage in {}", directory.display());
        Ok(Self { directory })
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path(&self, key: &str, extension: &str) -> Result<PathBuf, Error> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(Error::InvalidKey(key.to_string()));
        }
        Ok(self.directory.join(format!("{key}.{extension}")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        match fs::read_to_string(self.path(key, "json")?) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let path = self.path(key, "json")?;
        let tmp_path = self.path(key, "json.tmp")?;
        let mut file = fs::File::create(&tmp_path)?;
        let result = file
            .write_all(value.as_bytes())
            .and_then(|()| file.sync_all())
            .and_then(|()| {
                drop(file);
                fs::rename(&tmp_path, path)
            });
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result.map_err(Error::from)
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        match fs::remove_file(self.path(key, "json")?) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
