use std::sync::Arc;

use services::QuizSessionService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn window_title(&self) -> String;
    fn quiz(&self) -> Arc<QuizSessionService>;
}

#[derive(Clone)]
pub struct AppContext {
    window_title: String,
    quiz: Arc<QuizSessionService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            window_title: app.window_title(),
            quiz: app.quiz(),
        }
    }

    #[must_use]
    pub fn window_title(&self) -> &str {
        &self.window_title
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizSessionService> {
        Arc::clone(&self.quiz)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
