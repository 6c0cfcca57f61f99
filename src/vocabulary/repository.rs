//! Persistence interfaces for the vocabulary list.
//!
//! `KeyValueStore` models the browser's local storage (string keys, string
//! values). `VocabularyRepository` is the seam the store talks to; the
//! key-value and JSON-file backends both persist the same flat array of
//! `{Hanzi, Pinyin, English, Category}` objects.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::RepositoryError;
use crate::models::VocabEntry;

/// Key holding the serialised vocabulary list.
pub const VOCABULARY_KEY: &str = "vocabulary";

// ---------------------------------------------------------------------------
// Key-value storage
// ---------------------------------------------------------------------------

/// String key-value storage with local-storage semantics.
///
/// Methods take `&self`; backends needing mutation use interior mutability.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}

/// In-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        (**self).remove(key)
    }
}

// ---------------------------------------------------------------------------
// Vocabulary repositories
// ---------------------------------------------------------------------------

/// Whole-list persistence for vocabulary entries.
///
/// `load` returns `Ok(None)` when nothing has been persisted yet, which is
/// what sends the store to the CSV source instead.
pub trait VocabularyRepository {
    fn load(&self) -> Result<Option<Vec<VocabEntry>>, RepositoryError>;
    fn save(&self, entries: &[VocabEntry]) -> Result<(), RepositoryError>;
}

impl<T: VocabularyRepository + ?Sized> VocabularyRepository for &T {
    fn load(&self) -> Result<Option<Vec<VocabEntry>>, RepositoryError> {
        (**self).load()
    }

    fn save(&self, entries: &[VocabEntry]) -> Result<(), RepositoryError> {
        (**self).save(entries)
    }
}

impl<T: VocabularyRepository + ?Sized> VocabularyRepository for Box<T> {
    fn load(&self) -> Result<Option<Vec<VocabEntry>>, RepositoryError> {
        (**self).load()
    }

    fn save(&self, entries: &[VocabEntry]) -> Result<(), RepositoryError> {
        (**self).save(entries)
    }
}

/// Stores the list as one JSON value under [`VOCABULARY_KEY`].
#[derive(Debug)]
pub struct KeyValueRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> KeyValueRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, VOCABULARY_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        KeyValueRepository { store, key: key.into() }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Forget the persisted list so the next load falls back to CSV.
    pub fn clear(&self) -> Result<(), RepositoryError> {
        self.store.remove(&self.key)
    }
}

impl<S: KeyValueStore> VocabularyRepository for KeyValueRepository<S> {
    fn load(&self) -> Result<Option<Vec<VocabEntry>>, RepositoryError> {
        let Some(raw) = self.store.get(&self.key)? else {
            debug!("no persisted vocabulary under '{}'", self.key);
            return Ok(None);
        };
        let entries: Vec<VocabEntry> = serde_json::from_str(&raw)?;
        info!("restored {} entries from '{}'", entries.len(), self.key);
        Ok(Some(entries))
    }

    fn save(&self, entries: &[VocabEntry]) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(&self.key, &raw)?;
        debug!("persisted {} entries under '{}'", entries.len(), self.key);
        Ok(())
    }
}

/// Stores the list as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VocabularyRepository for JsonFileRepository {
    fn load(&self) -> Result<Option<Vec<VocabEntry>>, RepositoryError> {
        if !self.path.exists() {
            debug!("no vocabulary file at {}", self.path.display());
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let entries: Vec<VocabEntry> = serde_json::from_str(&raw)?;
        info!("restored {} entries from {}", entries.len(), self.path.display());
        Ok(Some(entries))
    }

    fn save(&self, entries: &[VocabEntry]) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string_pretty(entries)?;
        // Replace in one step: write a sibling temp file, then rename over.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        debug!("persisted {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<VocabEntry> {
        vec![
            VocabEntry::new("你好", "ni3 hao3", "hello", "Greetings"),
            VocabEntry::new("你好", "ni3 hao3", "hello", "Greetings"),
            VocabEntry::new("谢谢", "xie4 xie4", "thanks", "Greetings"),
        ]
    }

    #[test]
    fn key_value_repository_round_trips_as_flat_array() {
        let kv = MemoryKeyValueStore::new();
        let repo = KeyValueRepository::new(&kv);
        assert!(repo.load().unwrap().is_none());

        repo.save(&sample()).unwrap();
        let raw = kv.get(VOCABULARY_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json[2]["English"], "thanks");
        assert_eq!(json.as_array().map(Vec::len), Some(3));

        assert_eq!(repo.load().unwrap(), Some(sample()));

        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn corrupt_payload_is_a_serde_error() {
        let kv = MemoryKeyValueStore::new();
        kv.set(VOCABULARY_KEY, "{not json").unwrap();
        let repo = KeyValueRepository::new(&kv);
        assert!(matches!(repo.load(), Err(RepositoryError::Serde(_))));
    }

    #[test]
    fn json_file_repository_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileRepository::new(dir.path().join("vocab.json"));
        assert!(repo.load().unwrap().is_none());

        repo.save(&sample()).unwrap();
        assert_eq!(repo.load().unwrap(), Some(sample()));
        assert!(!dir.path().join("vocab.json.tmp").exists());
    }
}
