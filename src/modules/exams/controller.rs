use askama::Template;
use axum::{extract::State, response::Html};
use lyceum_core::AppError;
use lyceum_observability::track_page_render;
use tracing::instrument;

use crate::modules::exams::model::ExamsPage;
use crate::modules::exams::service::{ExamService, PAGE};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn exams_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let data = ExamService::load_exam_page(state.store.as_ref()).await;

    let page = ExamsPage::build(&state.site, &data).map_err(AppError::render)?;
    let html = page.render().map_err(AppError::render)?;

    track_page_render(PAGE);
    Ok(Html(html))
}
