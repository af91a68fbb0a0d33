//! HTTP surface for the property chat engine.

pub mod error;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::http::Request;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

pub use state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/chat", get(routes::chat))
        .route("/api/suggestions", get(routes::suggestion))
        .route("/api/properties", get(routes::properties))
        .route("/api/properties/:id", get(routes::property_by_id))
        .route("/health", get(routes::health))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                tracing::info_span!(
                    "request",
                    id = %Uuid::new_v4(),
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
