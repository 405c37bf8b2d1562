use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::model::QuestionRecord;
use services::{QuestionService, QuestionSource, QuizSessionService};
use storage::repository::InMemoryRepository;

use crate::app::App;
use crate::context::{UiApp, build_app_context};

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizSessionService>,
}

impl UiApp for TestApp {
    fn window_title(&self) -> String {
        "Test Quiz".to_string()
    }

    fn quiz(&self) -> Arc<QuizSessionService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn AppHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { App {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_harness_with_source(source: Arc<dyn QuestionSource>) -> ViewHarness {
    let app = Arc::new(TestApp {
        quiz: Arc::new(QuizSessionService::new(source)),
    });
    let dom = VirtualDom::new_with_props(AppHarness, AppHarnessProps { app });
    ViewHarness { dom }
}

pub fn setup_harness(records: Vec<QuestionRecord>) -> ViewHarness {
    let repo = InMemoryRepository::new();
    for (number, record) in (1_u32..).zip(records) {
        repo.insert(format!("question_{number:02}.json"), record)
            .expect("insert question");
    }
    setup_harness_with_source(Arc::new(QuestionService::new(Arc::new(repo))))
}
