use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::academics_page;

pub fn init_academics_router() -> Router<AppState> {
    Router::new().route("/academics", get(academics_page))
}
