mod events;
mod health;
mod jobs;
mod languages;

pub use events::events_handler;
pub use health::health_handler;
pub use jobs::{create_job_handler, get_job_handler, list_jobs_handler};
pub use languages::languages_handler;

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Bearer token from the Authorization header, if present.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}
