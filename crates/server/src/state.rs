use std::sync::Arc;

use services::QuestionService;
use storage::repository::{QuestionRepository, Storage};

use crate::config::ServerConfig;

/// Shared handler state. Holds no mutable data; every request reloads the store.
#[derive(Clone)]
pub struct AppState {
    questions: Arc<QuestionService>,
}

impl AppState {
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self {
            questions: Arc::new(QuestionService::new(questions)),
        }
    }

    #[must_use]
    pub fn from_config(config: &ServerConfig) -> Self {
        let storage = Storage::filesystem(config.questions_dir.clone());
        Self::new(storage.questions)
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionService {
        &self.questions
    }
}
