use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::services::{JobServiceError, NewJobRequest};
use crate::domain::{Job, JobId};
use crate::presentation::state::AppState;

use super::{bearer_token, ErrorResponse};

#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub file_name: String,
    pub file_size: u64,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Serialize)]
pub struct CreateJobResponse {
    pub job_id: String,
    pub message: String,
}

/// External job record shape: wire status tokens, ISO-8601 timestamps.
#[derive(Serialize)]
pub struct JobResponse {
    pub id: String,
    pub owner_id: String,
    pub file_name: String,
    pub file_size: u64,
    pub source_language: String,
    pub target_language: String,
    pub status: String,
    pub upload_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.to_string(),
            owner_id: job.owner_id.to_string(),
            file_name: job.file_name,
            file_size: job.file_size,
            source_language: job.source_language.as_str().to_string(),
            target_language: job.target_language.as_str().to_string(),
            status: job.status.as_str().to_string(),
            upload_date: job.upload_date.to_rfc3339(),
            completed_date: job.completed_date.map(|d| d.to_rfc3339()),
            error_message: job.error_message,
        }
    }
}

#[tracing::instrument(skip(state, headers, request))]
pub async fn create_job_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateJobRequest>,
) -> impl IntoResponse {
    let user = state.auth.current_user(bearer_token(&headers)).await;

    let new_job = NewJobRequest {
        file_name: request.file_name,
        file_size: request.file_size,
        source_language: request.source_language,
        target_language: request.target_language,
    };

    match state.job_service.add_job(user.as_ref(), new_job).await {
        Ok(job_id) => (
            StatusCode::ACCEPTED,
            Json(CreateJobResponse {
                job_id: job_id.to_string(),
                message: "Translation job accepted".to_string(),
            }),
        )
            .into_response(),
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, headers))]
pub async fn list_jobs_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let user = state.auth.current_user(bearer_token(&headers)).await;

    match state.job_service.visible_jobs(user.as_ref()).await {
        Ok(jobs) => {
            let jobs: Vec<JobResponse> = jobs.into_iter().map(JobResponse::from).collect();
            (StatusCode::OK, Json(jobs)).into_response()
        }
        Err(e) => service_error_response(e),
    }
}

#[tracing::instrument(skip(state, headers))]
pub async fn get_job_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(job_id): Path<String>,
) -> impl IntoResponse {
    let uuid = match Uuid::parse_str(&job_id) {
        Ok(u) => u,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Invalid job ID: {}", job_id),
                }),
            )
                .into_response();
        }
    };

    let user = state.auth.current_user(bearer_token(&headers)).await;

    match state
        .job_service
        .get_job(user.as_ref(), JobId::from_uuid(uuid))
        .await
    {
        Ok(job) => (StatusCode::OK, Json(JobResponse::from(job))).into_response(),
        Err(e) => service_error_response(e),
    }
}

fn service_error_response(error: JobServiceError) -> axum::response::Response {
    let status = match &error {
        JobServiceError::NotAuthenticated => StatusCode::UNAUTHORIZED,
        JobServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        JobServiceError::NotFound => StatusCode::NOT_FOUND,
        JobServiceError::InvalidTransition { .. } => StatusCode::CONFLICT,
        JobServiceError::Store(_) => {
            tracing::error!(error = %error, "Job store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
