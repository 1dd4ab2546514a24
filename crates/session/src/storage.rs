//! Persisted key-value storage for session data.
//!
//! Two string-valued keys exist: the bearer token and the encoded principal.
//! Reads are async (the single deferred step at startup); writes and removes
//! are synchronous so sign-out is applied before the follow-up navigation.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Storage key holding the opaque bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the JSON-encoded principal.
pub const USER_KEY: &str = "user";

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
}

/// String key-value persistence for session state.
pub trait SessionStorage {
    /// Read a key. Absent keys are `Ok(None)`, not errors.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Write a key, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// File-backed storage: one file per key under a configured directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory storage for tests and for simulating the login flow's writes.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key, the way the external login screen writes into storage.
    pub fn seed(&mut self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("session storage lock poisoned")
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .lock()
            .expect("session storage lock poisoned")
            .contains_key(key)
    }
}

impl SessionStorage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .entries
            .lock()
            .expect("session storage lock poisoned")
            .get(key)
            .cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.seed(key, value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .expect("session storage lock poisoned")
            .remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_storage_round_trip() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get(TOKEN_KEY).await.unwrap(), None);

        storage.put(TOKEN_KEY, "abc123").unwrap();
        assert_eq!(
            storage.get(TOKEN_KEY).await.unwrap(),
            Some("abc123".to_string())
        );

        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.get(TOKEN_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());

        assert_eq!(storage.get(USER_KEY).await.unwrap(), None);

        storage.put(USER_KEY, "{\"k\":1}").unwrap();
        assert_eq!(
            storage.get(USER_KEY).await.unwrap(),
            Some("{\"k\":1}".to_string())
        );

        storage.remove(USER_KEY).unwrap();
        assert_eq!(storage.get(USER_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn file_storage_remove_is_noop_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path());
        storage.remove(TOKEN_KEY).unwrap();
        storage.remove(TOKEN_KEY).unwrap();
    }

    #[tokio::test]
    async fn file_storage_creates_directory_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("session").join("state");
        let mut storage = FileStorage::new(&nested);
        storage.put(TOKEN_KEY, "t").unwrap();
        assert_eq!(storage.get(TOKEN_KEY).await.unwrap(), Some("t".to_string()));
    }
}
