use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{about_page, about_section_page};

pub fn init_about_router() -> Router<AppState> {
    Router::new()
        .route("/about", get(about_page))
        .route("/about/{section}", get(about_section_page))
}
