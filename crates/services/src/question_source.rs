use async_trait::async_trait;
use quiz_core::model::{Question, QuestionRecord};
use reqwest::Client;

use crate::error::QuestionSourceError;
use crate::question_service::{LoadReport, QuestionService};

/// Where a quiz session gets its questions from.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch the full, validated question sequence once.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the questions cannot be fetched at all.
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;
}

#[async_trait]
impl QuestionSource for QuestionService {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Ok(self.load().await?.into_questions())
    }
}

/// Fetches questions from a running quiz server.
#[derive(Clone)]
pub struct HttpQuestionSource {
    client: Client,
    endpoint: String,
}

impl HttpQuestionSource {
    pub const QUESTIONS_PATH: &'static str = "/api/questions";

    /// `base_url` is the server root, e.g. `http://127.0.0.1:5000`.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        let endpoint = format!(
            "{}{}",
            base_url.trim_end_matches('/'),
            Self::QUESTIONS_PATH
        );
        Self { client, endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(QuestionSourceError::HttpStatus(response.status()));
        }

        let records: Vec<QuestionRecord> = response.json().await?;
        let report = LoadReport::from_records(&self.endpoint, records);
        Ok(report.into_questions())
    }
}
