use askama::Template;
use axum::{extract::State, response::Html};
use lyceum_core::AppError;
use lyceum_observability::track_page_render;
use tracing::instrument;

use crate::modules::academics::model::AcademicsPage;
use crate::state::AppState;

pub const PAGE: &str = "academics";

/// Static page; nothing is read from the store.
#[instrument(skip(state))]
pub async fn academics_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = AcademicsPage::build(&state.site)
        .render()
        .map_err(AppError::render)?;

    track_page_render(PAGE);
    Ok(Html(html))
}
