use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs every request except health probes.
pub async fn filtered_logger(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    if path != "/health" {
        tracing::info!("{} {} -> {}", method, path, response.status());
    }
    response
}
