use std::sync::Arc;

use quiz_core::model::{FieldFilter, QuestionId, QuestionRecord};
use quiz_core::ResetConfirmation;
use services::{QuestionService, QuizSessionService};
use storage::FsQuestionRepository;

fn record(id: u64, topic: &str, correct: i64) -> QuestionRecord {
    QuestionRecord::new(id, topic, "General", format!("Q{id}"), ["a", "b"], correct)
}

#[tokio::test]
async fn session_over_directory_skips_malformed_files_and_scores_answers() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let repo = FsQuestionRepository::new(tmp.path());
    repo.write_question(1, &record(7, "Python", 1))
        .await
        .expect("write");
    std::fs::write(tmp.path().join("question_02.json"), "{\"id\": ").expect("write broken");

    let questions = QuestionService::new(Arc::new(repo));
    let quiz = QuizSessionService::new(Arc::new(questions));
    let mut session = quiz.start_session().await.expect("start");

    assert_eq!(session.questions().len(), 1);
    let id = session.current_question().expect("question").id();
    assert_eq!(id, QuestionId::new(7));

    session.select_option(1, id);
    assert_eq!(session.score(), 1);
    assert_eq!(session.answered_ids().collect::<Vec<_>>(), vec![id]);
}

#[tokio::test]
async fn topic_filter_and_reset_over_loaded_questions() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let repo = FsQuestionRepository::new(tmp.path());
    for (number, rec) in [
        (1, record(1, "Python", 0)),
        (2, record(2, "Python", 1)),
        (3, record(3, "Data Structures", 0)),
    ] {
        repo.write_question(number, &rec).await.expect("write");
    }

    let quiz = QuizSessionService::new(Arc::new(QuestionService::new(Arc::new(repo))));
    let mut session = quiz.start_session().await.expect("start");

    session.set_topic_filter(FieldFilter::topic("Python"));
    assert_eq!(session.visible_len(), 2);
    assert!(session
        .visible()
        .iter()
        .all(|question| question.topic() == "Python"));

    session.select_option(0, QuestionId::new(1));
    session.next();
    session.select_option(0, QuestionId::new(2));
    assert_eq!(session.score(), 1);
    assert_eq!(session.progress().progress_text(), "Progress: 2/3");

    assert!(session.reset(ResetConfirmation::Confirmed));
    assert_eq!(session.answered_count(), 0);
    assert_eq!(session.visible_len(), 2);
}

#[tokio::test]
async fn empty_directory_starts_an_empty_session() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let repo = FsQuestionRepository::new(tmp.path().join("missing"));
    let quiz = QuizSessionService::new(Arc::new(QuestionService::new(Arc::new(repo))));

    let session = quiz.start_session().await.expect("start");
    assert!(session.questions().is_empty());
    assert!(session.current_question().is_none());
    assert_eq!(session.progress().score_text(), "Score: 0/0");
}
