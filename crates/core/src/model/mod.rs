mod filter;
mod ids;
mod question;

pub use filter::{ALL_LEVELS, ALL_TOPICS, FieldFilter, FilterChoices, QuestionFilter};
pub use ids::QuestionId;
pub use question::{Question, QuestionError, QuestionRecord, VideoLink};
