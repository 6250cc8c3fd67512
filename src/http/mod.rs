//! HTTP surface of the service
//!
//! Root greeting and health routes, plus the versioned `/api/v1` routes.

pub mod handlers;
