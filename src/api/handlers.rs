use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::CorrelationId,
    models::{Movie, MovieQueryParams},
    validation::{self, ValidationError},
};

use super::AppState;

fn reject(correlation_id: CorrelationId, err: ValidationError) -> AppError {
    tracing::warn!(
        request_id = %correlation_id,
        parameter = err.field(),
        reason = %err.message(),
        "Invalid request parameter"
    );
    AppError::from(err)
}

/// Wire names of the list parameters, in validation order
const QUERY_PARAMETERS: [&str; 7] = [
    "q",
    "genre",
    "year",
    "rating",
    "actorid",
    "pageNumber",
    "pageSize",
];

/// Turns a query string the extractor could not decode into a validation error
///
/// serde names the offending field in backticks (e.g. "duplicate field `pageSize`");
/// anything else is reported against the query string as a whole.
fn query_rejection(rejection: QueryRejection) -> ValidationError {
    let text = rejection.body_text();
    let field = QUERY_PARAMETERS
        .iter()
        .find(|name| text.contains(&format!("`{}`", name)))
        .copied()
        .unwrap_or("query");
    ValidationError::new(field, text)
}

fn path_rejection(rejection: PathRejection) -> ValidationError {
    ValidationError::new("id", rejection.body_text())
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "healthy" }))),
        Err(e) => {
            tracing::error!(error = %e, store = state.store.name(), "Movie store unreachable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy" })),
            )
        }
    }
}

/// Lists movies matching the query string filters, one page at a time
pub async fn list_movies(
    State(state): State<AppState>,
    Extension(correlation_id): Extension<CorrelationId>,
    params: Result<Query<MovieQueryParams>, QueryRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Query(params) = params.map_err(|e| reject(correlation_id, query_rejection(e)))?;
    let query = validation::validate_movies(&params).map_err(|e| reject(correlation_id, e))?;

    let movies = state.store.query_movies(&query).await.map_err(|e| {
        tracing::error!(
            request_id = %correlation_id,
            error = %e,
            store = state.store.name(),
            "Movie query failed"
        );
        AppError::from(e)
    })?;

    tracing::debug!(
        request_id = %correlation_id,
        result_count = movies.len(),
        "Movies listed"
    );

    Ok(Json(movies))
}

/// Fetches a single movie by id
pub async fn get_movie(
    State(state): State<AppState>,
    Extension(correlation_id): Extension<CorrelationId>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let Path(id) = id.map_err(|e| reject(correlation_id, path_rejection(e)))?;
    validation::validate_movie_id(Some(&id)).map_err(|e| reject(correlation_id, e))?;

    let movie = state.store.get_movie(&id).await.map_err(|e| {
        let err = AppError::from(e);
        if let AppError::Store(inner) = &err {
            tracing::error!(
                request_id = %correlation_id,
                movie_id = %id,
                error = %inner,
                store = state.store.name(),
                "Movie lookup failed"
            );
        }
        err
    })?;

    Ok(Json(movie))
}
