//! Error types for every fallible operation in the crate.
//!
//! None of these are fatal: callers recover them at the boundary where they
//! occur (empty store, `Idle` engine, skipped row) and show that state.

use thiserror::Error;

use crate::models::EntryId;

/// Failure inside a persistence backend.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// The vocabulary could not be loaded from either source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Could not read vocabulary resource: {0}")]
    Io(#[from] std::io::Error),
    #[error("Could not parse vocabulary CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV header is missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("Persisted vocabulary is unreadable: {0}")]
    Persisted(#[from] serde_json::Error),
    #[error(transparent)]
    Repository(RepositoryError),
}

impl From<RepositoryError> for LoadError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Serde(e) => LoadError::Persisted(e),
            other => LoadError::Repository(other),
        }
    }
}

/// A CSV row that was skipped during import.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed row at line {line}: {reason}")]
pub struct MalformedRowError {
    pub line: u64,
    pub reason: String,
}

/// A store mutation that did not take effect.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No vocabulary entry {0}")]
    NotFound(EntryId),
    #[error("No vocabulary entry at index {0}")]
    IndexOutOfRange(usize),
    #[error("Vocabulary entries need a Hanzi")]
    EmptyHanzi,
    #[error("Vocabulary failed to load; edits are disabled until it reloads")]
    Degraded,
    #[error("Could not persist vocabulary: {0}")]
    Persist(#[from] RepositoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("No question available: the active set is empty")]
    EmptyActiveSet,
}

/// Rejected manual dictionary entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Hanzi must not be empty")]
    EmptyHanzi,
    #[error("English must not be empty")]
    EmptyEnglish,
    #[error("Category must not be empty")]
    EmptyCategory,
    #[error("No pinyin known for '{0}'")]
    UnknownPinyin(String),
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
