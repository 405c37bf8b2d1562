use async_trait::async_trait;
use quiz_core::model::QuestionRecord;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::fs::FsQuestionRepository;

/// Errors surfaced by storage adapters.
///
/// Per-file problems are not storage errors; they travel as [`FileError`]
/// next to the files that loaded fine.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("cannot access question directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a single question file could not be turned into a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FileError {
    #[error("cannot read file: {0}")]
    Read(String),

    #[error("invalid question JSON: {0}")]
    Parse(String),
}

/// One entry of the question store, in load order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionFile {
    /// File name (or another stable label for non-file stores).
    pub source: String,
    pub record: Result<QuestionRecord, FileError>,
}

/// Read-only contract of a question store.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// List every question entry in store order, parsed or not.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only when the store as a whole is unavailable.
    /// Broken entries are reported through [`QuestionFile::record`].
    async fn list_question_files(&self) -> Result<Vec<QuestionFile>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    files: Arc<Mutex<Vec<QuestionFile>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add or replace the entry labelled `source`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert(
        &self,
        source: impl Into<String>,
        record: QuestionRecord,
    ) -> Result<(), StorageError> {
        self.put(QuestionFile {
            source: source.into(),
            record: Ok(record),
        })
    }

    /// Add an entry that failed to load.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn insert_broken(
        &self,
        source: impl Into<String>,
        error: FileError,
    ) -> Result<(), StorageError> {
        self.put(QuestionFile {
            source: source.into(),
            record: Err(error),
        })
    }

    fn put(&self, file: QuestionFile) -> Result<(), StorageError> {
        let mut guard = self
            .files
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.retain(|existing| existing.source != file.source);
        guard.push(file);
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn list_question_files(&self) -> Result<Vec<QuestionFile>, StorageError> {
        let guard = self
            .files
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut files = guard.clone();
        files.sort_by(|a, b| a.source.cmp(&b.source));
        Ok(files)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_repository(InMemoryRepository::new())
    }

    /// Question files under `dir`, created on first use if missing.
    #[must_use]
    pub fn filesystem(dir: impl Into<PathBuf>) -> Self {
        Self::with_repository(FsQuestionRepository::new(dir))
    }

    #[must_use]
    pub fn with_repository(repo: impl QuestionRepository + 'static) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo);
        Self { questions }
    }
}
