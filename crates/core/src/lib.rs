#![forbid(unsafe_code)]

pub mod markup;
pub mod model;
pub mod session;

pub use session::{AnswerOutcome, QuizProgress, QuizSession, ResetConfirmation};
