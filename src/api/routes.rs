use axum::{middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{
    correlation_id_middleware, log_failed_responses, make_span_with_correlation_id,
};

use super::handlers;
use super::AppState;

/// Creates the application router with all routes
///
/// Layers run outermost-last: the correlation id is assigned before the trace
/// span is opened and before failed responses are logged.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api", api_routes())
        .layer(middleware::from_fn(log_failed_responses))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_correlation_id))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(correlation_id_middleware))
        .with_state(state)
}

/// API routes under /api
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::list_movies))
        .route("/movies/:id", get(handlers::get_movie))
}
