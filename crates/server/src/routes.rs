use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use quiz_core::model::QuestionRecord;

use crate::error::ServerError;
use crate::page::INDEX_HTML;
use crate::state::AppState;

pub const QUESTIONS_PATH: &str = "/api/questions";

#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(QUESTIONS_PATH, get(list_questions))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Accepted records in file order, as authored. Skipped files only show up in the logs.
async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<QuestionRecord>>, ServerError> {
    let report = state.questions().load().await?;
    log::debug!(
        "serving {} questions ({} skipped)",
        report.questions().len(),
        report.skipped().len()
    );
    Ok(Json(report.into_records()))
}
