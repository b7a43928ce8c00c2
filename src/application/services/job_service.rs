use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};

use crate::application::ports::{JobStore, StoreError};
use crate::domain::{CurrentUser, Job, JobId, JobStatus, Language, Role};

use super::auth::AuthContext;
use super::translation_worker::TranslationMessage;

/// Stand-in for the extracted document body. Text extraction belongs to an
/// external collaborator; the tracker only forwards text to the engine.
const PLACEHOLDER_DOCUMENT_TEXT: &str = "This is a sample document content for translation.";

#[derive(Debug, Clone)]
pub struct NewJobRequest {
    pub file_name: String,
    pub file_size: u64,
    pub source_language: String,
    pub target_language: String,
}

#[derive(Debug, Clone)]
pub struct LanguageOptions {
    pub source: &'static [Language],
    pub target: &'static [Language],
}

#[derive(Debug, thiserror::Error)]
pub enum JobServiceError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("job not found")]
    NotFound,
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: JobStatus, to: JobStatus },
    #[error("store: {0}")]
    Store(#[from] StoreError),
}

/// The job lifecycle engine: creation, role-scoped reads, and guarded
/// status transitions. Accepted jobs are handed to the translation worker,
/// which drives them to a terminal state on its own.
pub struct JobService {
    store: Arc<dyn JobStore>,
    auth: AuthContext,
    worker_tx: mpsc::Sender<TranslationMessage>,
}

impl JobService {
    pub fn new(
        store: Arc<dyn JobStore>,
        auth: AuthContext,
        worker_tx: mpsc::Sender<TranslationMessage>,
    ) -> Self {
        Self {
            store,
            auth,
            worker_tx,
        }
    }

    /// Create a job owned by the calling user and enqueue its driver
    /// pipeline. Returns once the insert is acknowledged; the pipeline
    /// itself is fire-and-forget.
    #[tracing::instrument(skip(self, user, request), fields(file_name = %request.file_name))]
    pub async fn add_job(
        &self,
        user: Option<&CurrentUser>,
        request: NewJobRequest,
    ) -> Result<JobId, JobServiceError> {
        let user = user.ok_or(JobServiceError::NotAuthenticated)?;

        let (source, target) = validate_request(&request)?;

        let job = Job::new(
            user.id.clone(),
            request.file_name,
            request.file_size,
            source,
            target,
        );
        let job_id = job.id;

        self.store.insert(&job).await?;

        let msg = TranslationMessage {
            job_id,
            source_language: source,
            target_language: target,
            text: PLACEHOLDER_DOCUMENT_TEXT.to_string(),
        };

        // The job record is already persisted as queued. If the worker
        // queue is unavailable the job is left for a reconciliation sweep
        // rather than failing the caller.
        if let Err(e) = self.worker_tx.send(msg).await {
            tracing::error!(job_id = %job_id, error = %e, "Failed to enqueue translation pipeline");
        }

        tracing::info!(job_id = %job_id, owner_id = %user.id, "Translation job created");
        Ok(job_id)
    }

    /// Jobs the caller is authorized to read: everything for admins, own
    /// jobs otherwise. Sorted by upload date descending; equal timestamps
    /// keep insertion order.
    pub async fn visible_jobs(
        &self,
        user: Option<&CurrentUser>,
    ) -> Result<Vec<Job>, JobServiceError> {
        let user = user.ok_or(JobServiceError::NotAuthenticated)?;

        let mut jobs = if self.auth.has_role(user, Role::Admin) {
            self.store.list_all().await?
        } else {
            self.store.list_by_owner(&user.id).await?
        };

        // Stable sort over the store's insertion-ordered listing.
        jobs.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        Ok(jobs)
    }

    /// Fetch a single job, subject to the same visibility rule as
    /// `visible_jobs`. A job the caller may not see reads as not found.
    pub async fn get_job(
        &self,
        user: Option<&CurrentUser>,
        id: JobId,
    ) -> Result<Job, JobServiceError> {
        let user = user.ok_or(JobServiceError::NotAuthenticated)?;

        let job = self.store.get(id).await?.ok_or(JobServiceError::NotFound)?;

        if !self.auth.has_role(user, Role::Admin) && job.owner_id != user.id {
            return Err(JobServiceError::NotFound);
        }

        Ok(job)
    }

    /// Advance a job one step forward in its lifecycle.
    ///
    /// The current status is re-read and the write is conditional on it,
    /// so a concurrent writer cannot be overwritten blindly. Non-forward
    /// transitions, including no-ops, are rejected and leave the stored
    /// record unchanged.
    #[tracing::instrument(skip(self, error_message), fields(job_id = %id, to = %to))]
    pub async fn update_status(
        &self,
        id: JobId,
        to: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), JobServiceError> {
        let job = self.store.get(id).await?.ok_or(JobServiceError::NotFound)?;
        let from = job.status;

        if !from.can_advance_to(to) {
            return Err(JobServiceError::InvalidTransition { from, to });
        }

        match self.store.advance_status(id, from, to, error_message).await {
            Ok(()) => Ok(()),
            // Another writer advanced the job between our read and write.
            Err(StoreError::Conflict(_)) => {
                Err(JobServiceError::InvalidTransition { from, to })
            }
            Err(StoreError::NotFound(_)) => Err(JobServiceError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// The fixed source and target language sets. Pure.
    pub fn language_options(&self) -> LanguageOptions {
        LanguageOptions {
            source: Language::source_languages(),
            target: Language::target_languages(),
        }
    }

    /// "Something changed, re-fetch" signals from the store.
    pub fn subscribe_changes(&self) -> broadcast::Receiver<()> {
        self.store.subscribe()
    }
}

fn validate_request(request: &NewJobRequest) -> Result<(Language, Language), JobServiceError> {
    if request.file_name.trim().is_empty() {
        return Err(JobServiceError::Validation(
            "file name must not be empty".to_string(),
        ));
    }
    if request.file_size == 0 {
        return Err(JobServiceError::Validation(
            "file size must be greater than zero".to_string(),
        ));
    }

    let source = Language::from_str(&request.source_language)
        .map_err(JobServiceError::Validation)?;
    if !source.is_valid_source() {
        return Err(JobServiceError::Validation(format!(
            "{} is not a supported source language",
            source
        )));
    }

    let target = Language::from_str(&request.target_language)
        .map_err(JobServiceError::Validation)?;

    Ok((source, target))
}
