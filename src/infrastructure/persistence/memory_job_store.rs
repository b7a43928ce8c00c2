use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::broadcast;
use tokio::sync::RwLock;

use crate::application::ports::{JobStore, StoreError};
use crate::domain::{Job, JobId, JobStatus, UserId};

/// In-memory job store. Backs tests and local runs without a database.
///
/// Records live in a vector, so listings come back in insertion order,
/// the same contract the Postgres store honors via its sequence column.
pub struct MemoryJobStore {
    jobs: RwLock<Vec<Job>>,
    changes: broadcast::Sender<()>,
}

impl MemoryJobStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(64);
        Self {
            jobs: RwLock::new(Vec::new()),
            changes,
        }
    }

    fn notify(&self) {
        // No receivers is fine; nobody is watching yet.
        let _ = self.changes.send(());
    }
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn insert(&self, job: &Job) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().await;
        if jobs.iter().any(|j| j.id == job.id) {
            return Err(StoreError::QueryFailed(format!(
                "duplicate job id: {}",
                job.id
            )));
        }
        jobs.push(job.clone());
        drop(jobs);
        self.notify();
        Ok(())
    }

    async fn get(&self, id: JobId) -> Result<Option<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.iter().find(|j| j.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.clone())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Job>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .iter()
            .filter(|j| &j.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn advance_status(
        &self,
        id: JobId,
        from: JobStatus,
        to: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .iter_mut()
            .find(|j| j.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("job {}", id)))?;

        if job.status != from {
            return Err(StoreError::Conflict(format!(
                "job {} is {}, expected {}",
                id, job.status, from
            )));
        }

        job.status = to;
        job.completed_date = match to {
            JobStatus::Completed => Some(Utc::now()),
            _ => None,
        };
        job.error_message = match to {
            JobStatus::Error => error_message.map(String::from),
            _ => None,
        };
        drop(jobs);
        self.notify();
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }
}
