use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::exams_page;

pub fn init_exams_router() -> Router<AppState> {
    Router::new().route("/academics/exams", get(exams_page))
}
