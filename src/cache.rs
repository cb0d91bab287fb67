//! Cache storage module
//!
//! This module provides the key-value cache capability used by the show
//! repository, together with two backends: an in-process map and a
//! persistent store in the system's standard cache directory. Persistent
//! data is serialized to JSON format.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

/// Errors that can occur during cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    /// Failed to determine cache directory location
    #[error("Failed to determine cache directory location")]
    CacheDirectoryNotFound,

    /// Failed to create or access cache directory
    #[error("Failed to create cache directory at {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read cached data
    #[error("Failed to read cache file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write cached data
    #[error("Failed to write cache file {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to deserialize cached data
    #[error("Failed to deserialize cache file {path}: {source}")]
    DeserializationFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Failed to serialize data for caching
    #[error("Failed to serialize data: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// A generic key-value cache backend
///
/// Backends decide on their own eviction policy; callers never set an
/// expiry. No locking is offered across a `get` followed by a `set`, so two
/// writers racing on the same key simply overwrite each other.
pub trait CacheBackend<T> {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn get(&self, key: &str) -> Result<Option<T>, CacheError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &T) -> Result<(), CacheError>;
}

impl<T, C> CacheBackend<T> for Box<C>
where
    C: CacheBackend<T> + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<T>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &T) -> Result<(), CacheError> {
        (**self).set(key, value)
    }
}

/// In-process cache backed by a `HashMap`
///
/// Entries live as long as the cache itself. A poisoned lock is recovered,
/// so all methods keep operating on the stored entries.
#[derive(Debug)]
pub struct MemoryCache<T> {
    entries: Mutex<HashMap<String, T>>,
}

impl<T> MemoryCache<T> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if an entry exists for `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, T>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for MemoryCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> CacheBackend<T> for MemoryCache<T> {
    fn get(&self, key: &str) -> Result<Option<T>, CacheError> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &T) -> Result<(), CacheError> {
        self.entries().insert(key.to_string(), value.clone());
        Ok(())
    }
}

/// A persistent cache for serializable data
///
/// Every entry is stored as a JSON file in a directory, by default below the
/// system's standard cache directory. Entries persist across application
/// runs until the operating system or the user clears that directory.
#[derive(Debug)]
pub struct FileCache<T> {
    /// The directory where cached data is stored
    cache_dir: PathBuf,
    /// Phantom data for the generic type
    _phantom: PhantomData<T>,
}

impl<T> FileCache<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    /// Opens or creates a cache storage with the given name
    ///
    /// The cache will be stored in the system's standard cache directory
    /// under a subdirectory named after the application and the provided name.
    /// The name will be sanitized (lowercased, non-alphanumeric characters
    /// replaced with underscores).
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let cache: FileCache<Show> = FileCache::open("shows")?;
    /// ```
    pub fn open(name: &str) -> Result<Self, CacheError> {
        let proj_dirs = directories::ProjectDirs::from("org", "tvmaze-browse", "tvmaze-browse")
            .ok_or(CacheError::CacheDirectoryNotFound)?;

        Self::open_in(proj_dirs.cache_dir(), name)
    }

    /// Opens or creates a cache storage with the given name below `root`
    pub fn open_in(root: &Path, name: &str) -> Result<Self, CacheError> {
        let cache_dir = root.join(sanitize_name(name));

        fs::create_dir_all(&cache_dir).map_err(|e| CacheError::DirectoryCreationFailed {
            path: cache_dir.clone(),
            source: e,
        })?;

        Ok(Self {
            cache_dir,
            _phantom: PhantomData,
        })
    }

    /// Returns the path to the cache directory
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", sanitize_name(key)))
    }
}

impl<T> CacheBackend<T> for FileCache<T>
where
    T: Serialize + for<'de> Deserialize<'de>,
{
    /// Loads cached data for the given key
    ///
    /// Returns `None` if no file exists for the key, and an error if the file
    /// exists but cannot be read or deserialized.
    fn get(&self, key: &str) -> Result<Option<T>, CacheError> {
        let file_path = self.entry_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&file_path).map_err(|e| CacheError::ReadFailed {
            path: file_path.clone(),
            source: e,
        })?;

        let data =
            serde_json::from_str(&content).map_err(|e| CacheError::DeserializationFailed {
                path: file_path,
                source: e,
            })?;

        Ok(Some(data))
    }

    fn set(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let file_path = self.entry_path(key);
        let content = serde_json::to_string_pretty(value)?;

        fs::write(&file_path, content).map_err(|e| CacheError::WriteFailed {
            path: file_path,
            source: e,
        })?;

        Ok(())
    }
}

/// Sanitizes a name for use in file paths
///
/// Converts to lowercase and replaces all characters that are not
/// a-z, 0-9, or hyphen with underscores.
fn sanitize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
