use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use quiz_core::model::{Question, QuestionError, QuestionId, QuestionRecord};
use storage::repository::{FileError, QuestionFile, QuestionRepository};

use crate::error::QuestionServiceError;

//
// ─── LOAD REPORT ───────────────────────────────────────────────────────────────
//

/// Why a question entry was left out of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file could not be read or parsed.
    Unreadable(FileError),
    /// The record parsed but breaks a question invariant.
    Invalid(QuestionError),
    /// An earlier entry already uses this id.
    DuplicateId(QuestionId),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(err) => write!(f, "{err}"),
            SkipReason::Invalid(err) => write!(f, "{err}"),
            SkipReason::DuplicateId(id) => write!(f, "duplicate question id {id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub source: String,
    pub reason: SkipReason,
}

/// Outcome of loading the question store: accepted questions in store order,
/// plus every entry that was skipped and why.
///
/// Accepted records are kept as authored next to their validated form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    questions: Vec<Question>,
    records: Vec<QuestionRecord>,
    skipped: Vec<SkippedFile>,
}

impl LoadReport {
    /// Validate store entries in order. The first entry with a given id wins.
    #[must_use]
    pub fn from_files(files: Vec<QuestionFile>) -> Self {
        let mut report = Self::default();
        let mut seen = HashSet::new();

        for QuestionFile { source, record } in files {
            let record = match record {
                Ok(record) => record,
                Err(err) => {
                    // The storage adapter already logged the read/parse failure.
                    report.skip(source, SkipReason::Unreadable(err));
                    continue;
                }
            };

            let question = match record.validate() {
                Ok(question) => question,
                Err(err) => {
                    log::warn!("Quarantining {source}: {err}");
                    report.skip(source, SkipReason::Invalid(err));
                    continue;
                }
            };

            if !seen.insert(question.id()) {
                let reason = SkipReason::DuplicateId(question.id());
                log::warn!("Quarantining {source}: {reason}");
                report.skip(source, reason);
                continue;
            }

            report.questions.push(question);
            report.records.push(record);
        }

        report
    }

    /// Validate records that arrived without file names, labelled by position.
    #[must_use]
    pub fn from_records(label: &str, records: Vec<QuestionRecord>) -> Self {
        let files = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| QuestionFile {
                source: format!("{label}[{index}]"),
                record: Ok(record),
            })
            .collect();
        Self::from_files(files)
    }

    fn skip(&mut self, source: String, reason: SkipReason) {
        self.skipped.push(SkippedFile { source, reason });
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// Accepted records exactly as they were read, in store order.
    #[must_use]
    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<QuestionRecord> {
        self.records
    }
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Loads and validates the question store.
#[derive(Clone)]
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Read the whole store, keeping valid questions and reporting the rest.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError::Storage` only when the store itself is
    /// unavailable; individual bad entries end up in [`LoadReport::skipped`].
    pub async fn load(&self) -> Result<LoadReport, QuestionServiceError> {
        let files = self.questions.list_question_files().await?;
        Ok(LoadReport::from_files(files))
    }
}
