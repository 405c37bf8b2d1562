use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::markup::{Segment, parse_explanation};
use crate::model::ids::QuestionId;

//
// ─── ERRORS (record validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has no options")]
    NoOptions { id: QuestionId },

    #[error("question {id} has empty question text")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id}: correct index {correct} is outside 0..{options}")]
    CorrectOutOfRange {
        id: QuestionId,
        correct: i64,
        options: usize,
    },

    #[error("question {id}: invalid video url `{raw}`")]
    InvalidVideoUrl { id: QuestionId, raw: String },
}

//
// ─── RECORD (on-disk / wire shape) ─────────────────────────────────────────────
//

/// Question as it appears in a question file and in the `/api/questions` payload.
///
/// Nothing here is checked; use [`QuestionRecord::validate`] to obtain a [`Question`].
/// Optional fields stay absent when serialized, so an accepted record is served
/// with the same fields and values it was authored with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub topic: String,
    pub level: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space_complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_title: Option<String>,
}

impl QuestionRecord {
    /// Build a record with the required fields; the descriptive fields start absent.
    #[must_use]
    pub fn new(
        id: u64,
        topic: impl Into<String>,
        level: impl Into<String>,
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct: i64,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            topic: topic.into(),
            level: level.into(),
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct,
            explanation: None,
            time_complexity: None,
            space_complexity: None,
            video_url: None,
            video_title: None,
        }
    }

    #[must_use]
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = Some(explanation.into());
        self
    }

    #[must_use]
    pub fn with_complexity(mut self, time: impl Into<String>, space: impl Into<String>) -> Self {
        self.time_complexity = Some(time.into());
        self.space_complexity = Some(space.into());
        self
    }

    #[must_use]
    pub fn with_video(mut self, url: impl Into<String>, title: Option<String>) -> Self {
        self.video_url = Some(url.into());
        self.video_title = title;
        self
    }

    /// Check the record invariants and convert it into a domain `Question`.
    ///
    /// Uniqueness of `id` is a store-level property and is not checked here.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the record has no options, blank question
    /// text, a `correct` index outside the options, or a malformed video url.
    pub fn validate(&self) -> Result<Question, QuestionError> {
        let id = self.id;
        if self.options.is_empty() {
            return Err(QuestionError::NoOptions { id });
        }
        if self.question.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }
        let correct = usize::try_from(self.correct)
            .ok()
            .filter(|index| *index < self.options.len())
            .ok_or(QuestionError::CorrectOutOfRange {
                id,
                correct: self.correct,
                options: self.options.len(),
            })?;

        let video = match self.video_url.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let url = Url::parse(raw.trim()).map_err(|_| QuestionError::InvalidVideoUrl {
                    id,
                    raw: raw.to_owned(),
                })?;
                Some(VideoLink {
                    url,
                    title: self
                        .video_title
                        .clone()
                        .filter(|t| !t.trim().is_empty()),
                })
            }
            _ => None,
        };

        Ok(Question {
            id,
            topic: self.topic.clone(),
            level: self.level.clone(),
            prompt: self.question.clone(),
            options: self.options.clone(),
            correct,
            explanation: self.explanation.clone().unwrap_or_default(),
            time_complexity: self.time_complexity.clone().unwrap_or_default(),
            space_complexity: self.space_complexity.clone().unwrap_or_default(),
            video,
        })
    }
}

//
// ─── DOMAIN QUESTION ───────────────────────────────────────────────────────────
//

/// Optional tutorial link attached to a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoLink {
    url: Url,
    title: Option<String>,
}

impl VideoLink {
    pub const DEFAULT_TITLE: &'static str = "Watch explanation";

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Title to display, falling back to a generic label.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::DEFAULT_TITLE)
    }
}

/// A validated question: `correct` always indexes into `options`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    topic: String,
    level: String,
    prompt: String,
    options: Vec<String>,
    correct: usize,
    explanation: String,
    time_complexity: String,
    space_complexity: String,
    video: Option<VideoLink>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Display text of the question. May contain inline markup.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct
    }

    #[must_use]
    pub fn explanation_segments(&self) -> Vec<Segment> {
        parse_explanation(&self.explanation)
    }

    #[must_use]
    pub fn time_complexity(&self) -> &str {
        &self.time_complexity
    }

    #[must_use]
    pub fn space_complexity(&self) -> &str {
        &self.space_complexity
    }

    #[must_use]
    pub fn video(&self) -> Option<&VideoLink> {
        self.video.as_ref()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
