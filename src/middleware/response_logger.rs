use axum::{extract::Request, middleware::Next, response::Response};

use super::request_id::CorrelationId;

/// Logs every response that completes with a client or server error status.
///
/// The rest of the chain always runs first and the response is passed through
/// untouched; one log entry is written per failed response.
pub async fn log_failed_responses(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let url = request.uri().clone();
    let correlation_id = request.extensions().get::<CorrelationId>().copied();

    let response = next.run(request).await;

    let status = response.status();
    if status.as_u16() > 399 {
        let request_id = correlation_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        if status.is_server_error() {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Request failed"
            );
        } else {
            tracing::warn!(
                request_id = %request_id,
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Request failed"
            );
        }
    }

    response
}
