use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct LanguagesResponse {
    pub source: Vec<String>,
    pub target: Vec<String>,
}

pub async fn languages_handler(State(state): State<AppState>) -> impl IntoResponse {
    let options = state.job_service.language_options();
    (
        StatusCode::OK,
        Json(LanguagesResponse {
            source: options.source.iter().map(|l| l.to_string()).collect(),
            target: options.target.iter().map(|l| l.to_string()).collect(),
        }),
    )
}
