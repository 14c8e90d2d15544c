use axum::handler::HandlerWithoutStateExt;
use axum::{Router, middleware, routing::get};
use lyceum_core::AppError;
use lyceum_observability::{PrometheusHandle, logging_middleware, metrics_middleware, metrics_router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::modules::about::router::init_about_router;
use crate::modules::academics::router::init_academics_router;
use crate::modules::exams::router::init_exams_router;
use crate::state::AppState;

pub fn init_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    let assets = ServeDir::new(&state.site.public_dir)
        .not_found_service(not_found.into_service());

    let mut router = Router::new()
        .merge(init_academics_router())
        .merge(init_exams_router())
        .merge(init_about_router())
        .route("/health", get(health));

    if let Some(handle) = metrics {
        router = router.merge(metrics_router(handle));
    }

    router
        .fallback_service(assets)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(logging_middleware))
                .layer(middleware::from_fn(metrics_middleware)),
        )
}

async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("no page or asset at this path"))
}
