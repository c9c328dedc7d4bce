//! Key-value storage backends.
//!
//! The gateway talks to a flat string-to-string store. Two backends are
//! provided: an in-memory map for tests and embedding, and a directory
//! of JSON files with file locking so that several processes can share
//! one data directory safely.

use crate::{Error, Result};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const LOCK_FILE_NAME: &str = ".vitals.lock";
const VALUE_EXTENSION: &str = "json";

/// A flat, string-keyed store with no expiry
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Read-modify-write a single key.
    ///
    /// Backends shared between processes override this to hold a lock
    /// for the whole cycle.
    fn update<F>(&mut self, key: &str, f: F) -> Result<()>
    where
        F: FnOnce(Option<String>) -> Result<String>,
    {
        let current = self.get(key)?;
        let next = f(current)?;
        self.set(key, &next)
    }
}

/// In-memory store
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store, one file per key.
///
/// Values are replaced atomically (temp file, fsync, rename). A sidecar
/// lock file serializes writers: shared for reads, exclusive for writes
/// and for the whole of [`KeyValueStore::update`].
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the value for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.{}", name, VALUE_EXTENSION))
    }

    fn open_lock(&self) -> Result<File> {
        std::fs::create_dir_all(&self.dir)?;
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .open(self.dir.join(LOCK_FILE_NAME))?;
        Ok(file)
    }

    fn read_unlocked(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        let mut file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(Error::Io(e)),
        };

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        tracing::debug!("Read key {:?} from {:?}", key, path);
        Ok(Some(contents))
    }

    fn write_unlocked(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);

        // Unique temp file in the same directory for atomic rename
        let temp = NamedTempFile::new_in(&self.dir)?;
        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            writer.write_all(value.as_bytes())?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;
        temp.persist(&path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Wrote key {:?} to {:?}", key, path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.path_for(key).exists() {
            return Ok(None);
        }

        let lock = self.open_lock()?;
        lock.lock_shared()?;
        let result = self.read_unlocked(key);
        lock.unlock()?;
        result
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;
        let result = self.write_unlocked(key, value);
        lock.unlock()?;
        result
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.dir.exists() {
            return Ok(());
        }

        let lock = self.open_lock()?;
        lock.lock_exclusive()?;
        let result = match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => {
                tracing::debug!("Removed key {:?}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Io(e)),
        };
        lock.unlock()?;
        result
    }

    fn update<F>(&mut self, key: &str, f: F) -> Result<()>
    where
        F: FnOnce(Option<String>) -> Result<String>,
    {
        let lock = self.open_lock()?;
        lock.lock_exclusive()?;

        let result = self
            .read_unlocked(key)
            .and_then(f)
            .and_then(|next| self.write_unlocked(key, &next));

        lock.unlock()?;
        result
    }
}
