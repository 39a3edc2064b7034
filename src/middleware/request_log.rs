use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Logs `METHOD - URI - STATUS` for every request.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!("{} - {} - {}", method, uri, status.as_u16());
    } else {
        info!("{} - {} - {}", method, uri, status.as_u16());
    }

    response
}
