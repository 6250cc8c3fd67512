use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{error, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Emits one summary event per request; 4xx are warnings, 5xx are errors.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status().as_u16();
    let duration_ms = started_at.elapsed().as_millis();

    if response.status().is_server_error() {
        error!(%method, %path, status, duration_ms, "request failed");
    } else if response.status().is_client_error() {
        warn!(%method, %path, status, duration_ms, "request rejected");
    } else {
        info!(%method, %path, status, duration_ms, "request summary");
    }

    response
}
