#![forbid(unsafe_code)]

pub mod error;
pub mod question_service;
pub mod question_source;
pub mod quiz_service;

pub use error::{QuestionServiceError, QuestionSourceError};
pub use question_service::{LoadReport, QuestionService, SkipReason, SkippedFile};
pub use question_source::{HttpQuestionSource, QuestionSource};
pub use quiz_service::QuizSessionService;
