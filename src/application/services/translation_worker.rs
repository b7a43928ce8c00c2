use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::Instrument;

use crate::application::ports::{JobStore, TranslationEngine, TranslationRequest};
use crate::domain::{JobId, JobStatus, Language};

/// User-safe terminal messages. Provider detail stays in the logs.
const TRANSLATION_FAILED_MESSAGE: &str = "Translation service error. Please try again.";
const TRANSLATION_TIMEOUT_MESSAGE: &str = "Translation timed out. Please try again.";

pub struct TranslationMessage {
    pub job_id: JobId,
    pub source_language: Language,
    pub target_language: Language,
    pub text: String,
}

/// Delays and bounds for the driver pipeline. The processing delay
/// brackets the external extraction step; the timeout bounds the engine
/// call so a hung provider becomes an error transition, not a hang.
#[derive(Debug, Clone)]
pub struct PipelineTiming {
    pub processing_delay: Duration,
    pub translation_timeout: Duration,
}

impl Default for PipelineTiming {
    fn default() -> Self {
        Self {
            processing_delay: Duration::from_secs(3),
            translation_timeout: Duration::from_secs(30),
        }
    }
}

/// Receives accepted jobs and spawns one driver pipeline per job. Each
/// pipeline is an independent linear task that runs to a terminal state;
/// pipelines for different jobs share nothing but the store.
pub struct TranslationWorker {
    receiver: mpsc::Receiver<TranslationMessage>,
    store: Arc<dyn JobStore>,
    engine: Arc<dyn TranslationEngine>,
    timing: PipelineTiming,
}

impl TranslationWorker {
    pub fn new(
        receiver: mpsc::Receiver<TranslationMessage>,
        store: Arc<dyn JobStore>,
        engine: Arc<dyn TranslationEngine>,
        timing: PipelineTiming,
    ) -> Self {
        Self {
            receiver,
            store,
            engine,
            timing,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Translation worker started");
        while let Some(msg) = self.receiver.recv().await {
            let span = tracing::info_span!(
                "translation_job",
                job_id = %msg.job_id,
                source = %msg.source_language,
                target = %msg.target_language,
            );
            let store = Arc::clone(&self.store);
            let engine = Arc::clone(&self.engine);
            let timing = self.timing.clone();

            tokio::spawn(run_pipeline(store, engine, timing, msg).instrument(span));
        }
        tracing::info!("Translation worker stopped: channel closed");
    }
}

/// Drives one job from `Queued` to a terminal state. Never retries and
/// never panics: engine failures become the job's `error` status, store
/// write failures are logged and abandon the pipeline for a later
/// reconciliation pass.
async fn run_pipeline(
    store: Arc<dyn JobStore>,
    engine: Arc<dyn TranslationEngine>,
    timing: PipelineTiming,
    msg: TranslationMessage,
) {
    let job_id = msg.job_id;

    if !advance(&*store, job_id, JobStatus::Queued, JobStatus::Processing, None).await {
        return;
    }
    tokio::time::sleep(timing.processing_delay).await;

    if !advance(
        &*store,
        job_id,
        JobStatus::Processing,
        JobStatus::Translating,
        None,
    )
    .await
    {
        return;
    }

    let request = TranslationRequest {
        text: msg.text,
        source_language: msg.source_language,
        target_language: msg.target_language,
    };

    let outcome = tokio::time::timeout(timing.translation_timeout, engine.translate(&request)).await;

    match outcome {
        Ok(Ok(translated)) => {
            tracing::info!(chars = translated.len(), "Translation completed");
            advance(
                &*store,
                job_id,
                JobStatus::Translating,
                JobStatus::Completed,
                None,
            )
            .await;
        }
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Translation engine failed");
            advance(
                &*store,
                job_id,
                JobStatus::Translating,
                JobStatus::Error,
                Some(TRANSLATION_FAILED_MESSAGE),
            )
            .await;
        }
        Err(_) => {
            tracing::error!(
                timeout_secs = timing.translation_timeout.as_secs(),
                "Translation engine timed out"
            );
            advance(
                &*store,
                job_id,
                JobStatus::Translating,
                JobStatus::Error,
                Some(TRANSLATION_TIMEOUT_MESSAGE),
            )
            .await;
        }
    }
}

async fn advance(
    store: &dyn JobStore,
    job_id: JobId,
    from: JobStatus,
    to: JobStatus,
    error_message: Option<&str>,
) -> bool {
    tracing::debug!(from = %from, to = %to, "Job status transition");
    match store.advance_status(job_id, from, to, error_message).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(from = %from, to = %to, error = %e, "Status transition failed");
            false
        }
    }
}
