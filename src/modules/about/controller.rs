use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use lyceum_core::AppError;
use lyceum_observability::track_page_render;
use tracing::instrument;

use crate::modules::about::model::{AboutPage, AboutSection};
use crate::modules::about::service::{AboutService, PAGE};
use crate::state::AppState;

/// `GET /about`: the institute section.
#[instrument(skip(state))]
pub async fn about_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_about(&state, AboutSection::Institute).await
}

/// `GET /about/{section}`.
#[instrument(skip(state))]
pub async fn about_section_page(
    State(state): State<AppState>,
    Path(section): Path<String>,
) -> Result<Html<String>, AppError> {
    let section: AboutSection = section.parse().map_err(AppError::not_found)?;
    render_about(&state, section).await
}

async fn render_about(state: &AppState, section: AboutSection) -> Result<Html<String>, AppError> {
    let data = AboutService::load_about_page(state.store.as_ref()).await;

    let page = AboutPage::build(section, &state.site, &data).map_err(AppError::render)?;
    let html = page.render().map_err(AppError::render)?;

    track_page_render(PAGE);
    Ok(Html(html))
}
