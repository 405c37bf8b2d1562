use std::sync::Arc;

use quiz_core::QuizSession;

use crate::error::QuestionSourceError;
use crate::question_source::QuestionSource;

/// Starts quiz sessions from a question source.
#[derive(Clone)]
pub struct QuizSessionService {
    source: Arc<dyn QuestionSource>,
}

impl QuizSessionService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch the questions once and open a fresh session over them.
    ///
    /// An empty question set still yields a session; there is simply nothing
    /// to show.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` if the fetch fails.
    pub async fn start_session(&self) -> Result<QuizSession, QuestionSourceError> {
        let questions = self.source.fetch_questions().await.inspect_err(|err| {
            log::error!("failed to load questions: {err}");
        })?;
        log::info!("starting quiz session with {} questions", questions.len());
        Ok(QuizSession::new(questions))
    }
}
