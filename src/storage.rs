//! Persistent key-value storage for small string values
use enum_dispatch::enum_dispatch;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A string-keyed store of string values
#[enum_dispatch]
pub(crate) trait Storage {
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, writing it through to the backing medium
    /// (if any) before returning
    fn set_item(&mut self, key: &str, value: String) -> Result<(), SaveError>;

    fn remove_item(&mut self, key: &str) -> Result<(), SaveError>;
}

#[enum_dispatch(Storage)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum StorageBackend {
    FileStorage,
    MemoryStorage,
}

/// Storage kept in a JSON object in a file on disk
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Return the default path of the storage file
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("wrapsnake").join("storage.json"))
    }

    /// Open the storage file at `path`.  A missing file is treated as empty
    /// storage and is only created once something is stored.
    pub(crate) fn open(path: PathBuf) -> Result<FileStorage, LoadError> {
        let entries = match fs_err::read(&path) {
            Ok(src) => serde_json::from_slice(&src).map_err(LoadError::deserialize)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(LoadError::read(e)),
        };
        Ok(FileStorage { path, entries })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let mut src = serde_json::to_string(&self.entries).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), SaveError> {
        let old = self.entries.insert(key.to_owned(), value);
        let r = self.flush();
        if r.is_err() {
            // Keep memory in line with what's on disk
            match old {
                Some(v) => self.entries.insert(key.to_owned(), v),
                None => self.entries.remove(key),
            };
        }
        r
    }

    fn remove_item(&mut self, key: &str) -> Result<(), SaveError> {
        match self.entries.remove(key) {
            Some(old) => {
                let r = self.flush();
                if r.is_err() {
                    self.entries.insert(key.to_owned(), old);
                }
                r
            }
            None => Ok(()),
        }
    }
}

/// Storage that only lasts as long as the process
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryStorage(HashMap<String, String>);

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: String) -> Result<(), SaveError> {
        self.0.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), SaveError> {
        self.0.remove(key);
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save data to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize storage")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write storage file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read saved data from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read storage file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize storage")]
    Deserialize(#[source] serde_json::Error),
}
