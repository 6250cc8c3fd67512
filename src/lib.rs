use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;

use config::Config;
use errors::ServerError;

pub fn build_app() -> Router {
    let api_v1 = Router::new()
        .route("/hello", get(http::handlers::api_hello))
        .route("/health", get(http::handlers::api_health))
        .route("/greet", get(http::handlers::api_greet));

    Router::new()
        .route("/", get(http::handlers::greeting))
        .route("/health", get(http::handlers::health))
        .nest("/api/v1", api_v1)
        .layer(middleware::from_fn(logging::request_logging_middleware))
}

pub async fn bind(config: &Config) -> Result<TcpListener, ServerError> {
    let addr = config.bind_socket()?;
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::bind(addr, source))
}

pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    axum::serve(listener, build_app().into_make_service())
        .await
        .map_err(ServerError::Serve)
}
