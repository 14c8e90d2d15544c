//! Lyceum Observability
//!
//! Logging, tracing and metrics for the site:
//! - console, rolling-file and JSON logs through `tracing`
//! - optional OpenTelemetry export over OTLP
//! - Prometheus metrics, including per-page render and fallback counters
//! - HTTP request logging middleware
//!
//! Everything except basic console logging sits behind the `observability`
//! feature (on by default). At runtime `OBSERVABILITY_ENABLED=false` turns
//! it off again.
//!
//! # Examples
//!
//! ```no_run
//! use lyceum_observability::{init_tracing, shutdown_tracer};
//!
//! #[tokio::main]
//! async fn main() {
//!     init_tracing();
//!     // ... serve pages ...
//!     shutdown_tracer().await;
//! }
//! ```

pub mod basic_logging;
pub mod request_id;

#[cfg(feature = "observability")]
pub mod logging;
#[cfg(feature = "observability")]
pub mod metrics;

#[cfg(feature = "observability")]
pub use metrics_exporter_prometheus::PrometheusHandle;

#[cfg(feature = "observability")]
pub use logging::{init_tracing, is_observability_enabled, logging_middleware, shutdown_tracer};
#[cfg(feature = "observability")]
pub use metrics::{
    init_metrics, metrics_middleware, metrics_router, track_page_fallback, track_page_render,
};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    use axum::{Router, extract::Request, middleware::Next, response::Response};

    pub fn is_observability_enabled() -> bool {
        false
    }

    /// Request logging without the file and OTLP layers.
    pub async fn logging_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    pub async fn metrics_middleware(req: Request, next: Next) -> Response {
        next.run(req).await
    }

    /// Console logging only.
    pub fn init_tracing() {
        crate::basic_logging::init_basic_console_logging();
    }

    pub async fn shutdown_tracer() {}

    /// Stand-in for the Prometheus handle.
    #[derive(Clone, Debug)]
    pub struct PrometheusHandle;

    pub fn init_metrics() -> Option<PrometheusHandle> {
        None
    }

    pub fn metrics_router<S>(_handle: PrometheusHandle) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
    }

    pub fn track_page_render(_page: &'static str) {}
    pub fn track_page_fallback(_page: &'static str) {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
