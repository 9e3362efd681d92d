use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;

/// Builds the service router with every route mounted and request tracing enabled.
///
/// Paths other than the mounted ones fall through to axum's default 404, and
/// unsupported methods on a mounted path get its default 405.
pub fn app() -> Router {
    Router::new()
        .merge(routes::root::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
}
