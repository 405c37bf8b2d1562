use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::QuizSession;
use quiz_core::model::{Question, QuestionId, QuestionRecord};
use services::{QuestionServiceError, QuestionSource, QuestionSourceError};
use storage::repository::StorageError;

use super::QuizPanel;
use super::test_harness::{drive_dom, setup_harness, setup_harness_with_source};
use crate::vm::{QuizIntent, QuizVm};

fn record(id: u64, topic: &str, level: &str) -> QuestionRecord {
    QuestionRecord::new(id, topic, level, format!("Prompt {id}"), ["Alpha", "Beta"], 1)
        .with_explanation("Pick **Beta**.\n```python\nprint('beta')\n```")
        .with_complexity("O(1)", "O(1)")
}

#[derive(Props, Clone, PartialEq)]
struct PanelHarnessProps {
    vm: QuizVm,
}

#[component]
fn PanelHarness(props: PanelHarnessProps) -> Element {
    rsx! { QuizPanel { initial: props.vm.clone() } }
}

fn render_panel(vm: QuizVm) -> String {
    let mut dom = VirtualDom::new_with_props(PanelHarness, PanelHarnessProps { vm });
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

fn session(records: Vec<QuestionRecord>) -> QuizSession {
    let questions: Vec<Question> = records
        .into_iter()
        .map(|r| r.validate().expect("valid record"))
        .collect();
    QuizSession::new(questions)
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_harness(vec![
        record(1, "Python", "General"),
        record(2, "Data Structures", "Mid Level"),
    ]);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Test Quiz"), "missing title in {html}");
    assert!(html.contains("Question 1 of 2"), "missing position in {html}");
    assert!(html.contains("Python - General"), "missing badge in {html}");
    assert!(html.contains("Prompt 1"), "missing prompt in {html}");
    assert!(html.contains("Progress: 0/2"), "missing progress in {html}");
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    assert!(html.contains("All Topics"), "missing topic filter in {html}");
    assert!(html.contains("Data Structures"), "missing topic choice in {html}");
    assert!(html.contains("Mid Level"), "missing level choice in {html}");
    assert!(!html.contains("Time Complexity"), "explanation shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_empty_store_as_no_match() {
    let mut harness = setup_harness(Vec::new());
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("No questions match the selected filters."),
        "missing empty message in {html}"
    );
    assert!(html.contains("Progress: 0/0"), "missing progress in {html}");
}

struct FailingSource;

#[async_trait::async_trait]
impl QuestionSource for FailingSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Err(QuestionServiceError::Storage(StorageError::Connection("down".to_string())).into())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_load_error() {
    let mut harness = setup_harness_with_source(Arc::new(FailingSource));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("Error loading questions. Make sure question files are in the questions/ folder."),
        "missing error in {html}"
    );
}

#[test]
fn quiz_panel_smoke_renders_answered_question() {
    let mut vm = QuizVm::new(session(vec![
        record(1, "Python", "General")
            .with_video("https://example.com/beta", None),
    ]));
    vm.apply(QuizIntent::Select {
        option: 0,
        question_id: QuestionId::new(1),
    });
    let html = render_panel(vm);

    assert!(html.contains("option disabled selected incorrect"), "missing chosen state in {html}");
    assert!(html.contains("option disabled correct-answer"), "missing correct state in {html}");
    assert!(html.contains("Incorrect"), "missing verdict in {html}");
    assert!(html.contains("<strong>Beta</strong>"), "missing bold span in {html}");
    assert!(html.contains("language-python"), "missing code language in {html}");
    assert!(html.contains("Time Complexity"), "missing complexity in {html}");
    assert!(html.contains("Watch explanation"), "missing video link in {html}");
    assert!(html.contains("Score: 0/1"), "missing score in {html}");
}

#[test]
fn quiz_panel_smoke_renders_reset_confirmation() {
    let mut vm = QuizVm::new(session(vec![record(1, "Python", "General")]));
    vm.apply(QuizIntent::RequestReset);
    let html = render_panel(vm);

    assert!(html.contains("Are you sure you want to reset the quiz?"), "missing confirm in {html}");
}

#[test]
fn quiz_panel_smoke_sanitizes_prompt_markup() {
    let unsafe_prompt = QuestionRecord::new(
        1,
        "Python",
        "General",
        "What does <code>len([])</code> return?<script>alert(1)</script>",
        ["0", "None"],
        0,
    );
    let html = render_panel(QuizVm::new(session(vec![unsafe_prompt])));

    assert!(html.contains("<code>len([])</code>"), "missing inline code in {html}");
    assert!(!html.contains("<script>"), "script leaked into {html}");
}
