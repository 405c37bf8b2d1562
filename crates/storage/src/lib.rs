#![forbid(unsafe_code)]

pub mod fs;
pub mod repository;

pub use fs::FsQuestionRepository;
pub use repository::{
    FileError, InMemoryRepository, QuestionFile, QuestionRepository, Storage, StorageError,
};
