//! Axum HTTP handlers for the web server
//!
//! Every handler returns a fixed payload and reads nothing from the request
//! except the optional `name` query parameter of the greet route.

use axum::Json;
use axum_extra::extract::Query;
use serde::{Deserialize, Serialize};

pub const GREETING: &str = "🚀 Hello from Jenkins Docker Pipeline!";
pub const API_HELLO: &str = "Hello Jenkins CI/CD!";
pub const API_HEALTH: &str = "Application is running successfully!";
pub const DEFAULT_GREET_NAME: &str = "Guest";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct GreetQuery {
    #[serde(default)]
    pub name: Vec<String>,
}

pub async fn greeting() -> &'static str {
    GREETING
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn api_hello() -> &'static str {
    API_HELLO
}

pub async fn api_health() -> &'static str {
    API_HEALTH
}

pub async fn api_greet(Query(query): Query<GreetQuery>) -> String {
    greet_message(&query.name)
}

// Repeated names are comma-joined. Only an absent name falls back; an empty
// one is echoed as given.
pub fn greet_message(names: &[String]) -> String {
    let name = if names.is_empty() {
        DEFAULT_GREET_NAME.to_string()
    } else {
        names.join(",")
    };
    format!("Hello {name}! Welcome to our CI/CD pipeline!")
}
