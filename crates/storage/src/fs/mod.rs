use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::QuestionRecord;

use crate::repository::{FileError, QuestionFile, QuestionRepository, StorageError};

pub mod naming;

/// Question store backed by one JSON file per question in a directory.
///
/// The directory is re-read on every call; nothing is cached.
#[derive(Debug, Clone)]
pub struct FsQuestionRepository {
    dir: PathBuf,
}

impl FsQuestionRepository {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the question directory if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Directory` if the directory cannot be created.
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| self.directory_error(source))
    }

    /// Write `record` as `question_<number>.json`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory or the file cannot be written.
    pub async fn write_question(
        &self,
        number: u32,
        record: &QuestionRecord,
    ) -> Result<PathBuf, StorageError> {
        self.ensure_dir().await?;
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let path = self.dir.join(naming::file_name_for(number));
        tokio::fs::write(&path, json).await?;
        Ok(path)
    }

    /// Names of the question files in the directory, in load order.
    async fn question_file_names(&self) -> Result<Vec<String>, StorageError> {
        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|source| self.directory_error(source))?;

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|source| self.directory_error(source))?
        {
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if !naming::is_question_file(&name) {
                continue;
            }
            match tokio::fs::metadata(entry.path()).await {
                Ok(meta) if meta.is_file() => names.push(name),
                Ok(_) => log::debug!("ignoring non-file entry {}", entry.path().display()),
                Err(err) => log::warn!("cannot stat {}: {err}", entry.path().display()),
            }
        }

        // Plain file name order, so `question_10.json` sorts before `question_2.json`.
        names.sort();
        Ok(names)
    }

    fn directory_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Directory {
            path: self.dir.clone(),
            source,
        }
    }
}

#[async_trait]
impl QuestionRepository for FsQuestionRepository {
    async fn list_question_files(&self) -> Result<Vec<QuestionFile>, StorageError> {
        self.ensure_dir().await?;

        let names = self.question_file_names().await?;
        let mut files = Vec::with_capacity(names.len());
        for name in names {
            let path = self.dir.join(&name);
            let record = read_record(&path).await;
            if let Err(err) = &record {
                log::warn!("Error loading {}: {err}", path.display());
            }
            files.push(QuestionFile {
                source: name,
                record,
            });
        }
        Ok(files)
    }
}

async fn read_record(path: &Path) -> Result<QuestionRecord, FileError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FileError::Read(e.to_string()))?;
    serde_json::from_str(&contents).map_err(|e| FileError::Parse(e.to_string()))
}
