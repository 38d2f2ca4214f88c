use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs every request before dispatch. Purely observational: the request
/// passes through untouched and the response is returned as-is.
pub async fn log_requests(req: Request, next: Next) -> Response {
    info!(method = %req.method(), path = %req.uri().path(), "incoming request");
    next.run(req).await
}
